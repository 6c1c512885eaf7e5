//! Model Client: the seam between the relay and the upstream Gemini API.
//!
//! `ModelClient` is the one operation the relay needs from a provider.
//! `ModelHandle` is built once at startup, before the listener binds, and
//! records whether a usable client exists. It is never mutated afterwards.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod client;

pub use client::GeminiClient;

use crate::config::GeminiConfig;
use crate::error::Result;
use crate::models::gemini::GenerateContentResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Prompt used for the startup liveness probe.
pub const PROBE_PROMPT: &str = "test";

/// A generation backend bound to a single model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Model identifier every call is sent to.
    fn model(&self) -> &str;

    /// Send `prompt` upstream once and return the raw response.
    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse>;
}

/// Startup-time outcome of configuring the model client.
#[derive(Clone)]
pub enum ModelHandle {
    /// No API key was configured.
    MissingApiKey,
    /// A key was present but the client could not be built or probed.
    Uninitialized,
    Ready(Arc<dyn ModelClient>),
}

impl ModelHandle {
    /// Configure the Gemini client from `config`.
    ///
    /// Never fails: a missing key or a failed probe leaves the handle
    /// unavailable so the process can still serve `/health`.
    pub async fn initialize(config: &GeminiConfig) -> Self {
        let Some(api_key) = config.api_key.clone() else {
            error!("GOOGLE_API_KEY not configured; /generate will report the service as unavailable");
            return ModelHandle::MissingApiKey;
        };

        let client = match GeminiClient::new(config, api_key) {
            Ok(client) => client,
            Err(e) => {
                error!("Error initializing Gemini client for model '{}': {}", config.model, e);
                return ModelHandle::Uninitialized;
            }
        };

        if !config.probe_on_startup {
            warn!("Startup probe disabled; assuming model '{}' is reachable", config.model);
            return ModelHandle::Ready(Arc::new(client));
        }

        Self::probe(Arc::new(client)).await
    }

    /// Run the liveness probe against `client`.
    pub async fn probe(client: Arc<dyn ModelClient>) -> Self {
        match client.generate_content(PROBE_PROMPT).await {
            Ok(_) => {
                info!("Gemini configured successfully with model: {}", client.model());
                ModelHandle::Ready(client)
            }
            Err(e) => {
                error!("Gemini liveness probe failed for model '{}': {}", client.model(), e);
                ModelHandle::Uninitialized
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelHandle::Ready(_))
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelHandle::MissingApiKey => f.write_str("MissingApiKey"),
            ModelHandle::Uninitialized => f.write_str("Uninitialized"),
            ModelHandle::Ready(client) => f.debug_tuple("Ready").field(&client.model()).finish(),
        }
    }
}
