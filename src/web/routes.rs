//! Help page route configuration.

use crate::state::AppState;
use crate::web::handlers::{help_fragment_handler, help_page_handler};
use axum::{Router, routing::get};

/// Help page routes.
///
/// # Endpoints
///
/// - `GET /deletion-queue` - Full help page
/// - `GET /deletion-queue/fragment` - Panel markup only
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/deletion-queue", get(help_page_handler))
        .route("/deletion-queue/fragment", get(help_fragment_handler))
}
