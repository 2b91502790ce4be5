//! HTTP server initialization and runtime setup.
//!
//! Handles store creation, seeding, worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::page_view_worker::run_page_view_worker;
use crate::domain::repositories::PageViewRepository;
use crate::infrastructure::persistence::InMemoryPageViewRepository;
use crate::infrastructure::seed::load_seed_file;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory page-view store
/// - Seed import (when `SEED_FILE` is configured)
/// - Background page-view worker
/// - Axum HTTP server, stopped gracefully on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The seed file cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn PageViewRepository> = Arc::new(InMemoryPageViewRepository::new());

    let (page_view_tx, page_view_rx) = mpsc::channel(config.page_view_queue_capacity);
    let state = AppState::new(repository.clone(), page_view_tx, config.chart_limits());

    if let Some(ref path) = config.seed_file {
        let series = load_seed_file(path)
            .await
            .context("Failed to load seed data")?;
        state
            .page_view_service
            .import(series)
            .await
            .context("Failed to import seed data")?;
        tracing::info!("Seeded page views from {}", path.display());
    }

    let worker = tokio::spawn(run_page_view_worker(
        page_view_rx,
        repository,
        config.page_view_retry_attempts,
    ));
    tracing::info!("Page view worker started");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and with it the last sender) is gone; let the worker drain.
    if let Err(e) = worker.await {
        tracing::error!(error = %e, "Page view worker panicked");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
