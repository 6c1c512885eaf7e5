// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use gemini_relay::error::{RelayError, GENERIC_INTERNAL_MESSAGE};
use serde_json::{json, Value};

async fn render(error: RelayError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RelayError::ServiceUnavailable("Service down".to_string()),
        RelayError::InvalidArgument("Bad request".to_string()),
        RelayError::Internal("Something failed".to_string()),
        RelayError::Upstream("HTTP 500".to_string()),
        RelayError::Config("Bad origin".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_status_codes() {
    assert_eq!(
        RelayError::ServiceUnavailable(String::new()).status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        RelayError::InvalidArgument(String::new()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        RelayError::Internal(String::new()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        RelayError::Upstream(String::new()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_public_errors_render_detail() {
    let (status, body) = render(RelayError::InvalidArgument("'user_prompt' must be a non-empty string.".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "'user_prompt' must be a non-empty string."}));
}

#[tokio::test]
async fn test_internal_variants_hide_detail() {
    let (status, body) = render(RelayError::Upstream("HTTP 401: key AIzaLeaked rejected".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"detail": GENERIC_INTERNAL_MESSAGE}));

    let (_, body) = render(RelayError::Config("secret path".to_string())).await;
    assert_eq!(body["detail"], GENERIC_INTERNAL_MESSAGE);
}
