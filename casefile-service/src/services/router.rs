//! Action dispatch: request body in, shaped JSON result out.

use super::prompts::{build_prompt, PromptSpec};
use super::providers::TextProvider;
use super::random::RandomSource;
use crate::error::ActionError;
use crate::models::{Action, ActionRequest};
use metrics::{counter, histogram};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// Maps a client action onto one upstream generation call.
///
/// Holds no per-request state; clone the `Arc` and share it across handlers.
pub struct ActionRouter {
    api_key: Option<SecretString>,
    provider: Arc<dyn TextProvider>,
    random: Arc<dyn RandomSource>,
}

impl ActionRouter {
    pub fn new(
        api_key: Option<SecretString>,
        provider: Arc<dyn TextProvider>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        // An empty key is as good as none.
        let api_key = api_key.filter(|k| !k.expose_secret().is_empty());
        Self {
            api_key,
            provider,
            random,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn provider(&self) -> &Arc<dyn TextProvider> {
        &self.provider
    }

    /// Handle one raw request body.
    pub async fn handle(&self, body: &[u8]) -> Result<Value, ActionError> {
        let api_key = self.api_key.as_ref().ok_or(ActionError::MissingApiKey)?;

        let body: Value = serde_json::from_slice(body).map_err(ActionError::InvalidBody)?;
        if body.is_null() {
            return Err(ActionError::InvalidBody(serde::de::Error::custom(
                "request body is null",
            )));
        }
        let request = ActionRequest::from_body(body);

        let action = request
            .action_name()
            .and_then(|a| a.parse::<Action>().ok())
            .ok_or_else(|| {
                ActionError::InvalidAction(request.action.as_ref().map(|a| a.to_string()))
            })?;

        let result = self
            .dispatch(api_key.expose_secret(), action, request.payload)
            .await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        counter!("casefile_actions_total", "action" => action.as_str(), "outcome" => outcome)
            .increment(1);

        result
    }

    async fn dispatch(
        &self,
        api_key: &str,
        action: Action,
        payload: Option<Value>,
    ) -> Result<Value, ActionError> {
        let PromptSpec { prompt, schema } = build_prompt(action, payload, self.random.as_ref())
            .map_err(|source| ActionError::InvalidPayload {
                action: action.as_str(),
                source,
            })?;

        tracing::info!(
            action = %action,
            structured = schema.is_some(),
            "Forwarding action to generation provider"
        );

        let start = Instant::now();
        let text = self
            .provider
            .generate(api_key, &prompt, schema.as_ref())
            .await;
        histogram!("casefile_upstream_latency_seconds", "action" => action.as_str())
            .record(start.elapsed().as_secs_f64());

        let text = text?;

        if schema.is_some() {
            serde_json::from_str(&text).map_err(ActionError::InvalidGeneratedJson)
        } else {
            Ok(Value::String(text))
        }
    }
}
