//! Command-line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use mcpreg_core::{branding, default_registry_path};
use mcpreg_server::ApiConfig;

/// MCP Registry - registry document validator and API server.
///
/// Without a subcommand, validates the registry document (default
/// `registry.json` in the working directory) and exits non-zero when it has
/// errors.
#[derive(Parser, Debug)]
#[command(name = "mcpreg", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Registry document to validate
    #[arg(env = "MCPREG_REGISTRY")]
    pub registry: Option<PathBuf>,
}

impl Cli {
    pub fn registry_path(&self) -> PathBuf {
        self.registry.clone().unwrap_or_else(default_registry_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a registry document and report every problem found.
    Validate(ValidateArgs),
    /// Validate a registry document, then serve its servers over HTTP.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Registry document to validate
    #[arg(env = "MCPREG_REGISTRY")]
    pub registry: Option<PathBuf>,
}

impl ValidateArgs {
    pub fn registry_path(&self) -> PathBuf {
        self.registry.clone().unwrap_or_else(default_registry_path)
    }
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Registry document to serve
    #[arg(env = "MCPREG_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "MCPREG_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "MCPREG_PORT", default_value_t = branding::DEFAULT_API_PORT)]
    pub port: u16,

    /// Disable CORS headers
    #[arg(long)]
    pub no_cors: bool,

    /// Serve the registry even when validation reports errors
    #[arg(long)]
    pub skip_validation: bool,

    /// Also write daily-rotated log files into this directory
    #[arg(long, env = "MCPREG_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl ServeArgs {
    pub fn registry_path(&self) -> PathBuf {
        self.registry.clone().unwrap_or_else(default_registry_path)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.host.clone(),
            port: self.port,
            enable_cors: !self.no_cors,
        }
    }
}
