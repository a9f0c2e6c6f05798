mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use deletion_queue_help::api::handlers::health_handler;
use deletion_queue_help::domain::catalog::{DELETION_QUEUE_LINKS, LinkCatalog};

fn health_server(state: deletion_queue_help::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = health_server(common::create_test_state(DELETION_QUEUE_LINKS.clone()));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["docs_links"]["status"], "ok");
    assert_eq!(json["checks"]["docs_links"]["message"], "All 3 links resolve");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = health_server(common::create_test_state(LinkCatalog::empty()));

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json["checks"].get("docs_links").is_some());
    assert!(json["checks"].get("catalog").is_none());
}

#[tokio::test]
async fn test_health_empty_catalog_is_healthy() {
    let server = health_server(common::create_test_state(LinkCatalog::empty()));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["docs_links"]["message"], "All 0 links resolve");
}

#[tokio::test]
async fn test_health_degraded_when_link_fails() {
    let state = common::create_failing_state(DELETION_QUEUE_LINKS.clone(), "OVERVIEW.md#matches");
    let server = health_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["docs_links"]["status"], "error");
}
