//! Handler exposing the help panel as a JSON display tree.

use axum::{Json, extract::State};

use crate::api::dto::help::HelpPanelResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the rendered Deletion Queue panel as a display tree.
///
/// Hosts with their own UI composition consume this instead of HTML.
///
/// # Endpoint
///
/// `GET /api/help/deletion-queue`
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a catalog entry cannot be resolved.
pub async fn help_tree_handler(
    State(state): State<AppState>,
) -> Result<Json<HelpPanelResponse>, AppError> {
    let tree = state.renderer.render(&state.catalog)?;

    Ok(Json(HelpPanelResponse {
        topic: "deletion-queue",
        links: state.catalog.len(),
        tree,
    }))
}
