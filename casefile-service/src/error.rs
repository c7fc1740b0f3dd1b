//! Action routing errors and their mapping onto the HTTP error contract.

use crate::services::providers::ProviderError;
use service_core::error::AppError;
use thiserror::Error;

pub const MISSING_API_KEY: &str = "API key not configured";
pub const INVALID_ACTION: &str = "Invalid action";
pub const UPSTREAM_FAILED: &str = "Gemini API request failed";

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Malformed request body: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Unknown action: {0:?}")]
    InvalidAction(Option<String>),

    #[error("Invalid payload for {action}: {source}")]
    InvalidPayload {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Generated text is not valid JSON: {0}")]
    InvalidGeneratedJson(#[source] serde_json::Error),
}

impl ActionError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ActionError::MissingApiKey => "not_configured",
            ActionError::InvalidBody(_) => "invalid_body",
            ActionError::InvalidAction(_) => "invalid_action",
            ActionError::InvalidPayload { .. } => "invalid_payload",
            ActionError::Provider(ProviderError::Api { .. }) => "upstream_error",
            ActionError::Provider(_) => "provider_error",
            ActionError::InvalidGeneratedJson(_) => "invalid_generated_json",
        }
    }
}

impl From<ActionError> for AppError {
    fn from(err: ActionError) -> Self {
        match err {
            ActionError::MissingApiKey => AppError::NotConfigured(MISSING_API_KEY.to_string()),
            ActionError::InvalidAction(_) => AppError::BadRequest(INVALID_ACTION.to_string()),
            ActionError::Provider(ProviderError::Api { body, .. }) => AppError::Upstream {
                error: UPSTREAM_FAILED.to_string(),
                details: body,
            },
            other => AppError::InternalError(anyhow::Error::new(other)),
        }
    }
}
