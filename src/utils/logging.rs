//! Structured logging and security-focused trace utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing utilities to keep
//! API keys and full prompt bodies out of the logs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{RelayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| RelayError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| RelayError::Config(format!("Failed to install log subscriber: {}", e)))
}

/// Sanitizes sensitive information from log messages.
///
/// Replaces every Google API key (`AIza` followed by the key body) and the
/// value of any `key=` query parameter with a redaction marker. Upstream
/// transport errors can echo the request URL, so error text goes through
/// here before it is logged.
pub fn sanitize(input: &str) -> String {
    let redacted = redact_token(input, "key=", "key=[REDACTED]");
    redact_token(&redacted, "AIza", "[REDACTED_API_KEY]")
}

fn redact_token(input: &str, marker: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        result.push_str(&rest[..pos]);
        let after = &rest[pos + marker.len()..];
        // The token ends at the first delimiter (or end of string)
        let end = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
            .unwrap_or(after.len());
        result.push_str(replacement);
        rest = &after[end..];
    }

    result.push_str(rest);
    result
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_api_key() {
        let input = "error sending request for url (https://host/v1beta/models/m:generateContent?key=AIzaSyA-bc_123)";
        let output = sanitize(input);
        assert!(!output.contains("AIzaSyA-bc_123"));
        assert!(output.contains("key=[REDACTED]"));
        assert!(output.ends_with(')'));
    }

    #[test]
    fn test_sanitize_bare_api_key() {
        let output = sanitize("using AIzaSyDUMMY and AIzaSyOTHER now");
        assert_eq!(output, "using [REDACTED_API_KEY] and [REDACTED_API_KEY] now");
    }

    #[test]
    fn test_sanitize_leaves_plain_text() {
        assert_eq!(sanitize("connection refused"), "connection refused");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 5), "héllo...");
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("", 10), "");
    }
}
