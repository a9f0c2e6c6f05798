//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`                          - Health check: catalog and link resolution
//! - `GET  /help/deletion-queue`             - Help page (HTML)
//! - `GET  /help/deletion-queue/fragment`    - Help panel markup (HTML fragment)
//! - `GET  /api/help/deletion-queue`         - Help panel display tree (JSON)
//! - `/static/*`                             - Icon assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is the directory served under `/static`, which holds the
/// icon assets referenced by [`crate::infrastructure::icons::AssetIconRenderer`].
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/help", web::routes::routes())
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
