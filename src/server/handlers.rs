// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::RelayError;
use crate::models::{ErrorResponse, GeneratedResponse, HealthResponse, PromptRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

/// Liveness check. Says nothing about whether `/generate` can succeed.
pub async fn health_handler() -> Json<HealthResponse> {
    info!("Health check endpoint accessed");
    Json(HealthResponse::ok())
}

/// Handler for `POST /generate`.
///
/// Availability is checked before the body is looked at, so an unconfigured
/// service answers 503 even for malformed input.
pub async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Result<Json<GeneratedResponse>, RelayError> {
    state.relay.client()?;

    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected generate request body: {}", rejection.body_text());
        RelayError::InvalidArgument(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let response = state.relay.generate(&request).await?;
    Ok(Json(response))
}

fn detail_response(status: StatusCode) -> (StatusCode, Json<ErrorResponse>) {
    let detail = status.canonical_reason().unwrap_or("Error").to_string();
    (status, Json(ErrorResponse { detail }))
}

/// Catch-all for unknown routes, keeping the `{"detail": ...}` error shape.
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    detail_response(StatusCode::NOT_FOUND)
}

/// Known path, unsupported method.
pub async fn method_not_allowed_handler() -> (StatusCode, Json<ErrorResponse>) {
    detail_response(StatusCode::METHOD_NOT_ALLOWED)
}
