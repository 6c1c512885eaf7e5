// gemini-relay - Prompt relay in front of the Google Gemini API
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod relay;
pub mod server;
pub mod utils;
