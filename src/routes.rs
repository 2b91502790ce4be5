//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: store and page-view queue
//! - `/api/*`            - Page-view and chart REST API
//!
//! Unknown paths answer with a JSON `not_found` error. Every request is
//! traced, and trailing slashes are trimmed before routing.

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
