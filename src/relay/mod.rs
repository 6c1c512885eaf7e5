//! Prompt relay: the request-handling core behind `POST /generate`.
//!
//! Each call runs one sequential chain: check availability, validate the
//! prompt, compose the upstream prompt, await the model once, classify the
//! result. The only suspension point is the upstream call.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod prompt;

use crate::error::{RelayError, Result};
use crate::gemini::{ModelClient, ModelHandle};
use crate::models::gemini::GenerateContentResponse;
use crate::models::{GeneratedResponse, PromptRequest};
use crate::utils::logging::{preview, sanitize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Label used when a safety block carries no readable reason.
pub const UNKNOWN_BLOCK_REASON: &str = "Unknown safety block";

pub const MISSING_KEY_MESSAGE: &str = "Gemini API key not configured. Service is unavailable.";
pub const UNINITIALIZED_MESSAGE: &str = "Gemini model not initialized. Service is unavailable.";
pub const EMPTY_PROMPT_MESSAGE: &str = "'user_prompt' must be a non-empty string.";
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "An error occurred while communicating with the Gemini API.";

/// Classified result of one upstream call.
#[derive(Debug)]
pub enum GenerationOutcome {
    Success(String),
    SafetyBlocked(String),
    Failure(RelayError),
}

impl GenerationOutcome {
    /// Classify the raw result of [`ModelClient::generate_content`].
    pub fn classify(result: Result<GenerateContentResponse>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(e) => return GenerationOutcome::Failure(e),
        };

        if response.parts().is_empty() {
            let reason = response.block_reason().unwrap_or_else(|| {
                warn!("Could not retrieve block reason from prompt feedback");
                UNKNOWN_BLOCK_REASON
            });
            return GenerationOutcome::SafetyBlocked(reason.to_string());
        }

        match response.text() {
            Some(text) => GenerationOutcome::Success(text),
            None => GenerationOutcome::Failure(RelayError::Upstream(
                "Response parts contained no text".to_string(),
            )),
        }
    }
}

/// Error returned to the caller for a safety block.
pub fn safety_block_error(reason: &str) -> RelayError {
    RelayError::InvalidArgument(format!(
        "Response blocked due to safety concerns ({}). Please modify your prompt.",
        reason
    ))
}

/// Handles generation requests against a fixed model handle.
#[derive(Clone, Debug)]
pub struct PromptRelay {
    handle: ModelHandle,
    system_instruction: Arc<str>,
}

impl PromptRelay {
    /// Relay using the compiled-in system instruction.
    pub fn new(handle: ModelHandle) -> Self {
        Self::with_instruction(handle, prompt::SYSTEM_INSTRUCTION)
    }

    pub fn with_instruction(handle: ModelHandle, system_instruction: &str) -> Self {
        Self {
            handle,
            system_instruction: Arc::from(system_instruction),
        }
    }

    /// Model client to call, or the reason the service is unavailable.
    pub fn client(&self) -> Result<&Arc<dyn ModelClient>> {
        match &self.handle {
            ModelHandle::Ready(client) => Ok(client),
            ModelHandle::MissingApiKey => {
                error!("Generate request failed: GOOGLE_API_KEY is not configured");
                Err(RelayError::ServiceUnavailable(MISSING_KEY_MESSAGE.to_string()))
            }
            ModelHandle::Uninitialized => {
                error!("Generate request failed: Gemini model is not initialized");
                Err(RelayError::ServiceUnavailable(UNINITIALIZED_MESSAGE.to_string()))
            }
        }
    }

    /// Run one generation request end to end.
    pub async fn generate(&self, request: &PromptRequest) -> Result<GeneratedResponse> {
        let client = self.client()?;
        let user_prompt = validate(&request.user_prompt)?;

        info!("Received user prompt: {}", preview(user_prompt, 100));

        let composite = prompt::compose(&self.system_instruction, user_prompt);
        debug!("Full prompt being sent to Gemini: {}", preview(&composite, 200));

        info!("Sending request to Gemini model: {}", client.model());
        let outcome = GenerationOutcome::classify(client.generate_content(&composite).await);

        match outcome {
            GenerationOutcome::Success(text) => {
                info!("Successfully received response from Gemini");
                debug!("Gemini response text: {}", preview(&text, 200));
                Ok(GeneratedResponse { response: text })
            }
            GenerationOutcome::SafetyBlocked(reason) => {
                warn!("Gemini response was blocked. Reason: {}", reason);
                Err(safety_block_error(&reason))
            }
            GenerationOutcome::Failure(e) => {
                error!("Error calling Gemini API: {}", sanitize(&e.to_string()));
                Err(RelayError::Internal(UPSTREAM_FAILURE_MESSAGE.to_string()))
            }
        }
    }
}

/// Trimmed prompt, or `InvalidArgument` when nothing is left.
pub fn validate(user_prompt: &str) -> Result<&str> {
    let trimmed = user_prompt.trim();
    if trimmed.is_empty() {
        warn!("Generate request failed: 'user_prompt' is empty");
        return Err(RelayError::InvalidArgument(EMPTY_PROMPT_MESSAGE.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> Result<GenerateContentResponse> {
        Ok(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_classify_success() {
        let outcome = GenerationOutcome::classify(response(json!({
            "candidates": [{"content": {"parts": [{"text": "SYN, SYN-ACK, ACK"}]}}]
        })));
        assert!(matches!(outcome, GenerationOutcome::Success(t) if t == "SYN, SYN-ACK, ACK"));
    }

    #[test]
    fn test_classify_block_with_reason() {
        let outcome = GenerationOutcome::classify(response(json!({
            "promptFeedback": {"blockReason": "PROHIBITED_CONTENT"}
        })));
        assert!(matches!(outcome, GenerationOutcome::SafetyBlocked(r) if r == "PROHIBITED_CONTENT"));
    }

    #[test]
    fn test_classify_block_without_reason() {
        let outcome = GenerationOutcome::classify(response(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })));
        assert!(matches!(outcome, GenerationOutcome::SafetyBlocked(r) if r == UNKNOWN_BLOCK_REASON));
    }

    #[test]
    fn test_classify_transport_error() {
        let outcome = GenerationOutcome::classify(Err(RelayError::Upstream("boom".to_string())));
        assert!(matches!(outcome, GenerationOutcome::Failure(_)));
    }

    #[test]
    fn test_classify_parts_without_text() {
        let outcome = GenerationOutcome::classify(response(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": ""}}]}}]
        })));
        assert!(matches!(outcome, GenerationOutcome::Failure(_)));
    }

    #[test]
    fn test_validate_trims() {
        assert_eq!(validate("  hi there \n").unwrap(), "hi there");
        assert!(matches!(validate(" \t\n"), Err(RelayError::InvalidArgument(_))));
        assert!(matches!(validate(""), Err(RelayError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_unavailable_handles() {
        let request = PromptRequest {
            user_prompt: "hello".to_string(),
        };

        let missing = PromptRelay::new(ModelHandle::MissingApiKey);
        let err = missing.generate(&request).await.unwrap_err();
        assert!(matches!(err, RelayError::ServiceUnavailable(ref m) if m == MISSING_KEY_MESSAGE));

        let uninit = PromptRelay::new(ModelHandle::Uninitialized);
        let err = uninit.generate(&request).await.unwrap_err();
        assert!(matches!(err, RelayError::ServiceUnavailable(ref m) if m == UNINITIALIZED_MESSAGE));
    }
}
