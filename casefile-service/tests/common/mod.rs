use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use casefile_service::config::CaseConfig;
use casefile_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Router wired to a wiremock stand-in for the Gemini API.
pub struct TestApp {
    pub upstream: MockServer,
    pub router: Router,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_key(Some(TEST_API_KEY)).await
    }

    pub async fn spawn_with_key(api_key: Option<&str>) -> Self {
        let upstream = MockServer::start().await;
        let config = CaseConfig::for_tests(&format!("{}/v1beta", upstream.uri()), api_key);
        let state = AppState::from_config(config).expect("Failed to build app state");

        TestApp {
            upstream,
            router: build_router(state),
        }
    }

    pub async fn post_raw(&self, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/proxy")
                    .header("content-type", "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn post_action(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw(serde_json::to_vec(&body).unwrap()).await
    }

    pub async fn upstream_request_count(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

/// A `generateContent` success body whose first part is `text`.
pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 8 }
    })
}

pub fn case_file() -> Value {
    json!({
        "title": "The Sluggish Storefront",
        "noise": "Our shoppers say the site is unbearably slow since Monday.",
        "signal": { "rootCause": "database overload", "goal": "reduce latency" }
    })
}
