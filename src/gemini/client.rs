// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use super::ModelClient;
use crate::config::{ApiKey, GeminiConfig};
use crate::error::{RelayError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::utils::logging::{preview, sanitize};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Client for the Google Generative Language API.
///
/// Bound to one API key and one model at construction. Each call is a single
/// blocking `generateContent` request; nothing is retried.
pub struct GeminiClient {
    http_client: Client,
    api_key: ApiKey,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client for `config.model` using `api_key`.
    pub fn new(config: &GeminiConfig, api_key: ApiKey) -> Result<Self> {
        let mut builder = Client::builder().use_rustls_tls();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for model {}", config.model);

        Ok(Self {
            http_client,
            api_key,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    /// Call Gemini `generateContent` with a single user turn.
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        debug!("Calling generateContent API for model: {}", self.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| RelayError::Upstream(sanitize(&format!("HTTP error: {}", e))))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| RelayError::Upstream(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error_msg = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            error!("Gemini API error: HTTP {} - {}", status, sanitize(&error_msg));
            return Err(RelayError::Upstream(format!(
                "HTTP {}: {}",
                status.as_u16(),
                sanitize(&error_msg)
            )));
        }

        debug!("Raw Gemini response: {}", preview(&response_text, 500));

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            RelayError::Upstream(format!("Response parsing error: {}", e))
        })
    }
}
