//! Fallback for unknown routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON `404` for any route that is not registered.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("No help content at this path", json!({ "path": uri.path() }))
}
