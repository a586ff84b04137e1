//! Registry API Server
//!
//! Serves the server entries of one registry document, loaded once at
//! startup and shared read-only between handlers.

mod handlers;

pub use handlers::{AppState, HealthResponse, ApiInfo};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use mcpreg_core::{branding, RegistryDocument};

/// Registry API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: branding::DEFAULT_API_PORT,
            enable_cors: true,
        }
    }
}

impl ApiConfig {
    /// Bind address as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL for local clients
    pub fn base_url(&self) -> String {
        branding::local_api_url(self.port, "")
            .trim_end_matches('/')
            .to_string()
    }
}

/// Registry API server
pub struct RegistryApiServer {
    config: ApiConfig,
    state: AppState,
}

impl RegistryApiServer {
    pub fn new(config: ApiConfig, registry: RegistryDocument) -> Self {
        let state = AppState::new(Arc::new(registry));
        if state.servers().is_none() {
            warn!("[Api] Registry 'servers' is not an array; listing endpoints will be empty");
        }
        Self { config, state }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        let server_routes = get(handlers::list_servers).options(handlers::preflight);

        let mut router = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health))
            .route("/v0.1/servers", server_routes.clone())
            // Fallback for clients on the older API version
            .route("/v0/servers", server_routes)
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router = router.layer(cors);
        }

        router
    }

    /// Run the server until Ctrl-C
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.addr();
        info!("[Api] Starting on {}", addr);
        info!(
            "[Api] CORS: {}",
            if self.config.enable_cors {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!(
            "[Api] Serving {} server entries",
            self.state.servers().map(<[_]>::len).unwrap_or(0)
        );

        let router = self.router();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("[Api] Ready at {}", self.config.base_url());

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("[Api] Stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("[Api] Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("[Api] Shutdown signal received");
}
