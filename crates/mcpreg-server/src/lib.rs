//! MCP Registry API
//!
//! HTTP server exposing a loaded registry document:
//! - Paginated server listing (`/v0.1/servers`, `/v0/servers`)
//! - API information (`/`)
//! - Health check (`/health`)

pub mod server;

pub use server::{ApiConfig, AppState, RegistryApiServer};
