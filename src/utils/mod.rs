//! Utility functions and helpers for the gemini-relay service.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization, API key redaction and log previews.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
