//! Data models for the relay API and the upstream Gemini API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The inbound `/generate` and `/health` endpoints (`relay`)
//! - The upstream Google Gemini `generateContent` call (`gemini`)

// Author: kelexine (https://github.com/kelexine)

pub mod gemini;
pub mod relay;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part, PromptFeedback,
};
pub use relay::{ErrorResponse, GeneratedResponse, HealthResponse, PromptRequest};
