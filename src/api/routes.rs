//! API route configuration.

use crate::api::handlers::help_tree_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes.
///
/// # Endpoints
///
/// - `GET /help/deletion-queue` - Deletion Queue help panel as a display tree
pub fn routes() -> Router<AppState> {
    Router::new().route("/help/deletion-queue", get(help_tree_handler))
}
