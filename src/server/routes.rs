// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{
    generate_handler, health_handler, method_not_allowed_handler, not_found_handler,
};
use super::middleware::{cors_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::relay::PromptRelay;
use axum::extract::DefaultBodyLimit;
use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

/// Immutable per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub relay: PromptRelay,
}

pub fn create_router(config: &AppConfig, relay: PromptRelay) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;
    // Enforced by the JSON extractor, so oversized bodies surface as a
    // rejection inside the handler after the availability check
    let body_limit = DefaultBodyLimit::max(config.server.max_body_bytes);

    let state = AppState { relay };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let app = Router::new()
        .route("/health", get(health_handler).fallback(method_not_allowed_handler))
        .route("/generate", post(generate_handler).fallback(method_not_allowed_handler))
        .fallback(not_found_handler)
        .layer(body_limit)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    Ok(app)
}
