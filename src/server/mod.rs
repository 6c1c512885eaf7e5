//! Axum-based HTTP server for the gemini-relay service.
//!
//! # Components
//!
//! - `handlers`: `/health`, `/generate` and the not-found fallback.
//! - `middleware`: Request ID tracking and the CORS allow-list.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
