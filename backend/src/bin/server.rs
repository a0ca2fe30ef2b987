//! Rail Scheduler HTTP Server Binary
//!
//! Loads configuration, creates the in-memory registry and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rail-scheduler-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `VALIDATION_MODE`: `permissive` (default) or `strict`
//! - `RUST_LOG`: Log filter (default: info)

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rail_scheduler::config::ServerConfig;
use rail_scheduler::db::LocalRepository;
use rail_scheduler::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Rail Scheduler HTTP Server");

    let config = ServerConfig::load().context("Failed to load server configuration")?;
    info!(validation = %config.validation.mode, "Configuration loaded");

    let state = AppState::new(Arc::new(LocalRepository::new()), config.validation.mode);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
