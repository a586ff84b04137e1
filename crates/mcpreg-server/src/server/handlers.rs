//! HTTP handlers for the registry API

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use mcpreg_core::{branding, paginate, PageRequest, RegistryDocument, ServerPage};

/// Shared state: the registry document loaded at startup
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RegistryDocument>,
}

impl AppState {
    pub fn new(registry: Arc<RegistryDocument>) -> Self {
        Self { registry }
    }

    /// Server entries, or `None` when the document's `servers` is not an array
    pub fn servers(&self) -> Option<&[Value]> {
        self.registry.servers()
    }
}

/// List server entries with offset/limit pagination
///
/// Query values are read as raw pairs so that malformed numbers fall back to
/// defaults and repeated keys use their first occurrence, instead of
/// rejecting the request.
pub async fn list_servers(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<ServerPage> {
    let page = PageRequest::from_query(first_value(&params, "limit"), first_value(&params, "offset"));
    debug!(
        "[Api] List servers: limit={}, offset={}",
        page.limit, page.offset
    );
    Json(paginate(state.servers().unwrap_or(&[]), page))
}

fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Answer OPTIONS requests on listing endpoints
///
/// Only reached with CORS disabled; otherwise `CorsLayer` answers every
/// OPTIONS request itself.
pub async fn preflight() -> Json<Value> {
    Json(json!({}))
}

/// Endpoint map advertised by the index
#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    #[serde(rename = "v0.1")]
    pub v0_1: String,
    pub v0: String,
}

/// API information response
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub endpoints: ApiEndpoints,
    pub documentation: String,
}

/// Root endpoint with API information
pub async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: branding::DISPLAY_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpoints {
            v0_1: "/v0.1/servers".to_string(),
            v0: "/v0/servers".to_string(),
        },
        documentation: branding::DOCUMENTATION_URL.to_string(),
    })
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    debug!("[Api] Health check");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
