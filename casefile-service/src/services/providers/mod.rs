//! AI provider abstractions and implementations.
//!
//! The router talks to the generation backend only through [`TextProvider`],
//! so tests can swap the Gemini client for [`mock::MockTextProvider`].

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Upstream answered with a non-success status; `body` is its raw text.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text/JSON generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a single completion for `prompt`.
    ///
    /// When `schema` is set the provider asks the backend for JSON conforming
    /// to it. The returned string is the raw generated text either way.
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        schema: Option<&Value>,
    ) -> Result<String, ProviderError>;

    /// Local readiness check; does not call the backend.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
