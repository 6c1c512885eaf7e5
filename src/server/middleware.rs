// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use crate::config::CorsConfig;
use crate::error::{RelayError, Result};
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// CORS restricted to the configured origins, with credentials.
///
/// Methods and headers are mirrored from the preflight request since
/// wildcards cannot be combined with credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            if origin.trim() == "*" {
                return Err(RelayError::Config(
                    "Wildcard CORS origin cannot be combined with credentials".to_string(),
                ));
            }
            origin.parse::<HeaderValue>().map_err(|e| {
                RelayError::Config(format!("Invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
