// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Conventional variable the Google SDKs read the key from.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest, prefix `GEMINI_RELAY__`)
    /// 2. Config file (`path`, or `~/.gemini-relay/config.toml`)
    /// 3. Defaults (lowest)
    ///
    /// CLI overrides are applied afterwards by the caller. A missing API key
    /// falls back to `GOOGLE_API_KEY`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists; an explicit path must exist
            .add_source(File::from(file_path).required(path.is_some()))
            .add_source(
                Environment::with_prefix("GEMINI_RELAY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        app_config.gemini.api_key = app_config
            .gemini
            .api_key
            .take()
            .and_then(|key| ApiKey::new(key.expose()))
            .or_else(|| {
                std::env::var(GOOGLE_API_KEY_VAR)
                    .ok()
                    .and_then(ApiKey::new)
            });

        Ok(app_config)
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gemini-relay")
            .join("config.toml")
    }
}
