use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;

/// `POST /api/proxy`: run one action and return its result as JSON.
///
/// The body is taken raw so that malformed JSON surfaces as an internal error
/// instead of the extractor's own rejection.
pub async fn proxy_action(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let result = state.actions.handle(&body).await.map_err(|e| {
        tracing::error!(error = %e, kind = e.kind(), "Action failed");
        AppError::from(e)
    })?;

    Ok(Json(result))
}
