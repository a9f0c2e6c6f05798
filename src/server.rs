//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Directory served under `/static`.
const STATIC_DIR: &str = "static";

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Documentation resolver, icon renderer and link catalog
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The documentation base URL or catalog file is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::from_config(&config)?;
    tracing::info!(links = state.catalog.len(), "Help catalog ready");

    if let Err(e) = state.renderer.render(&state.catalog) {
        tracing::warn!(error = %e, "Help panel does not render with the current configuration");
    }

    let app = app_router(state, STATIC_DIR);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
