use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness check.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "casefile-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness check: ready once an API key is configured and the provider
/// reports healthy.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if !state.actions.has_api_key() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "error": "API key not configured"
            })),
        );
    }

    match state.actions.provider().health_check().await {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unavailable",
                "error": e.to_string()
            })),
        ),
    }
}
