//! Gemini AI provider implementation.
//!
//! Implements single-shot text generation against Google's Gemini
//! `generateContent` endpoint.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Gemini API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL up to and including the API version segment.
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the API URL for the configured model and method. The key is
    /// attached as a query parameter at send time.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method
        )
    }

    fn build_request(prompt: &str, schema: Option<&Value>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: schema.map(|s| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: s.clone(),
            }),
        }
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        schema: Option<&Value>,
    ) -> Result<String, ProviderError> {
        let request = Self::build_request(prompt, schema);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            structured = schema.is_some(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            // The URL carries the key; keep it out of the message.
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %body, "Gemini API error");
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        api_response.into_first_text()
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.model.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini model not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    fn into_first_text(self) -> Result<String, ProviderError> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MalformedResponse("no candidates".to_string()))?;

        let finish_reason = candidate.finish_reason;
        let content = candidate.content.ok_or_else(|| {
            ProviderError::MalformedResponse(format!(
                "first candidate has no content (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

        content
            .parts
            .into_iter()
            .next()
            .ok_or_else(|| {
                ProviderError::MalformedResponse("first candidate has no parts".to_string())
            })?
            .text
            .ok_or_else(|| ProviderError::MalformedResponse("first part has no text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-test";

    fn provider(server: &MockServer) -> GeminiTextProvider {
        GeminiTextProvider::new(GeminiConfig {
            api_base: format!("{}/v1beta", server.uri()),
            model: MODEL.to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn candidate_body(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    async fn sent_body(server: &MockServer) -> Value {
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        serde_json::from_slice(&requests[0].body).unwrap()
    }

    #[tokio::test]
    async fn returns_first_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/v1beta/models/{}:generateContent", MODEL)))
            .and(query_param("key", "secret-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("hello")))
            .expect(1)
            .mount(&server)
            .await;

        let text = provider(&server)
            .generate("secret-key", "say hello", None)
            .await
            .unwrap();

        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn attaches_generation_config_only_with_schema() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("{}")))
            .mount(&server)
            .await;

        let schema = json!({ "type": "OBJECT", "properties": { "a": { "type": "STRING" } } });
        provider(&server)
            .generate("k", "structured", Some(&schema))
            .await
            .unwrap();

        let body = sent_body(&server).await;
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "structured");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(body["generationConfig"]["responseSchema"], schema);

        let plain_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("plain")))
            .mount(&plain_server)
            .await;

        provider(&plain_server)
            .generate("k", "free text", None)
            .await
            .unwrap();

        let body = sent_body(&plain_server).await;
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn non_success_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate("bad", "prompt", None)
            .await
            .unwrap_err();

        match err {
            ProviderError::Api { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "API key not valid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_candidates_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate("k", "prompt", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MalformedResponse(_)));
        assert!(err.to_string().contains("no candidates"));
    }

    #[tokio::test]
    async fn non_json_success_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = provider(&server)
            .generate("k", "prompt", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn blocked_candidate_reports_finish_reason() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();

        let err = response.into_first_text().unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let provider = GeminiTextProvider::new(GeminiConfig {
            api_base: format!("{}/", GEMINI_API_BASE),
            model: "gemini-2.5-flash".to_string(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();

        assert_eq!(
            provider.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
