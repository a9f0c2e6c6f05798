//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Every catalog path resolves
/// - **503 Service Unavailable**: At least one catalog path fails to resolve
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "docs_links": { "status": "ok", "message": "All 3 links resolve" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let links_check = check_docs_links(&state);

    let all_healthy = links_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            docs_links: links_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Renders the panel once to check that every catalog path resolves.
fn check_docs_links(state: &AppState) -> CheckStatus {
    match state.renderer.render(&state.catalog) {
        Ok(_) => CheckStatus::ok(format!("All {} links resolve", state.catalog.len())),
        Err(e) => {
            tracing::warn!(error = %e, "Health check found an unresolvable help link");
            CheckStatus::error(e.to_string())
        }
    }
}
