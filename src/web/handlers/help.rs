//! Deletion Queue help page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::render::content::HEADING;
use crate::state::AppState;

/// Template for the standalone help page.
///
/// Renders `templates/help_page.html`, which wraps the pre-rendered panel
/// markup in a minimal document shell.
#[derive(Template, WebTemplate)]
#[template(path = "help_page.html")]
pub struct HelpPageTemplate {
    pub title: &'static str,
    /// Escaped panel HTML produced by [`crate::domain::node::Node`]'s `Display`.
    pub panel: String,
}

/// Renders the Deletion Queue help panel inside a full HTML page.
///
/// # Endpoint
///
/// `GET /help/deletion-queue`
///
/// # Errors
///
/// Returns [`AppError::Internal`] if a catalog entry cannot be resolved.
pub async fn help_page_handler(
    State(state): State<AppState>,
) -> Result<HelpPageTemplate, AppError> {
    let panel = state.renderer.render(&state.catalog)?;
    tracing::debug!(links = state.catalog.len(), "Rendered help page");

    Ok(HelpPageTemplate {
        title: HEADING,
        panel: panel.to_string(),
    })
}

/// Renders only the panel markup, for embedding in a host layout.
///
/// # Endpoint
///
/// `GET /help/deletion-queue/fragment`
pub async fn help_fragment_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, AppError> {
    let panel = state.renderer.render(&state.catalog)?;
    Ok(Html(panel.to_string()))
}
