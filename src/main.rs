// gemini-relay - Prompt relay in front of the Google Gemini API
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use gemini_relay::cli::Args;
use gemini_relay::config::AppConfig;
use gemini_relay::gemini::ModelHandle;
use gemini_relay::relay::PromptRelay;
use gemini_relay::server::create_router;
use gemini_relay::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load .env and configuration
    dotenvy::dotenv().ok();
    let mut config = AppConfig::load_from(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting gemini-relay v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Configure the model client (fail-soft)
    let handle = ModelHandle::initialize(&config.gemini).await;
    if !handle.is_ready() {
        warn!("Model client unavailable ({:?}); serving /health only", handle);
    }

    // Phase 4: Build and start HTTP server
    let app = create_router(&config, PromptRelay::new(handle))?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
