//! Index, health and CORS behaviour

use axum::body::Body;
use axum::http::{Method, Request};
use mcpreg_core::{branding, RegistryDocument};
use mcpreg_server::{ApiConfig, RegistryApiServer};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::fixtures;

use super::{get_json, router_for, send};

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = get_json(router_for(fixtures::registry(1)), "/health").await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn index_lists_endpoints() {
    let (status, body) = get_json(router_for(fixtures::registry(1)), "/").await;

    assert_eq!(status, 200);
    assert_eq!(body["name"], json!(branding::DISPLAY_NAME));
    assert_eq!(
        body["endpoints"],
        json!({ "v0.1": "/v0.1/servers", "v0": "/v0/servers" })
    );
    assert_eq!(body["documentation"], json!(branding::DOCUMENTATION_URL));
}

#[tokio::test]
async fn options_request_answered_by_cors_layer() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v0.1/servers")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(router_for(fixtures::registry(1)), request).await;

    assert_eq!(status, 200);
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn options_request_without_cors_returns_empty_object() {
    let config = ApiConfig {
        enable_cors: false,
        ..ApiConfig::default()
    };
    let router = RegistryApiServer::new(config, RegistryDocument::new(fixtures::registry(1))).router();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v0/servers")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(router, request).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({}));
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/v0/servers")
        .header("origin", "https://example.com")
        .header("access-control-request-method", "GET")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(router_for(fixtures::registry(1)), request).await;

    assert_eq!(status, 200);
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_can_be_disabled() {
    let config = ApiConfig {
        enable_cors: false,
        ..ApiConfig::default()
    };
    let router = RegistryApiServer::new(config, RegistryDocument::new(fixtures::registry(1))).router();
    let request = Request::builder()
        .uri("/health")
        .header("origin", "https://example.com")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(router, request).await;

    assert_eq!(status, 200);
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = get_json(router_for(fixtures::registry(1)), "/v1/servers").await;
    assert_eq!(status, 404);
}
