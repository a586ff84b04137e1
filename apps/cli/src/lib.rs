//! # mcpreg
//!
//! Command-line entry point for the MCP Registry:
//!
//! - `mcpreg [PATH]` / `mcpreg validate [PATH]` - validate a registry document
//! - `mcpreg serve [PATH]` - validate, then serve the registry API

pub mod cli;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::process::ExitCode;

pub use cli::{Cli, Commands, ServeArgs, ValidateArgs};

/// Parse arguments and dispatch to the selected command
pub fn run() -> anyhow::Result<ExitCode> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve(args)) => {
            let _guard = logging::init_tracing("info", args.log_dir.as_deref());
            commands::serve(args)
        }
        Some(Commands::Validate(args)) => {
            let _guard = logging::init_tracing("warn", None);
            commands::validate(&args.registry_path())
        }
        None => {
            let _guard = logging::init_tracing("warn", None);
            commands::validate(&cli.registry_path())
        }
    }
}
