//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// One recorded call to [`MockTextProvider::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub api_key: String,
    pub prompt: String,
    pub schema: Option<Value>,
}

enum MockReply {
    Text(String),
    Api { status: u16, body: String },
    Malformed(String),
}

/// Mock text provider: replies with a canned answer and records every call.
pub struct MockTextProvider {
    reply: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    /// Answer every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Text(text.into()))
    }

    /// Fail every call as if the upstream returned `status` with `body`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Api {
            status,
            body: body.into(),
        })
    }

    /// Fail every call with a malformed-response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Malformed(reason.into()))
    }

    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        schema: Option<&Value>,
    ) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                api_key: api_key.to_string(),
                prompt: prompt.to_string(),
                schema: schema.cloned(),
            });
        }

        match &self.reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Api { status, body } => Err(ProviderError::Api {
                status: *status,
                body: body.clone(),
            }),
            MockReply::Malformed(reason) => Err(ProviderError::MalformedResponse(reason.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
