// Error types for gemini-relay
// Author: kelexine (https://github.com/kelexine)

use crate::models::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Message returned for any failure whose detail must stay server-side.
pub const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum RelayError {
    /// Startup did not produce a usable model client.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// Bad caller input or a prompt the provider refused.
    #[error("{0}")]
    InvalidArgument(String),

    /// Already-sanitized failure message safe to hand to the caller.
    #[error("{0}")]
    Internal(String),

    #[error("Gemini API error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `detail` field of the response body.
    pub fn detail(&self) -> String {
        match self {
            RelayError::ServiceUnavailable(msg)
            | RelayError::InvalidArgument(msg)
            | RelayError::Internal(msg) => msg.clone(),
            _ => GENERIC_INTERNAL_MESSAGE.to_string(),
        }
    }
}

// Convert RelayError to HTTP responses for Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.detail(),
        };

        (self.status_code(), axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
