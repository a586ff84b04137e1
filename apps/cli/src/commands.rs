//! Command handlers
//!
//! Load failures propagate as errors (fatal, no report). Validation failures
//! are printed as a report and turned into a non-zero exit code.

use anyhow::Context as _;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

use mcpreg_core::{load_registry, validate as validate_document, ValidationReport};
use mcpreg_server::RegistryApiServer;

use crate::cli::ServeArgs;

/// Process status for a validation verdict: 0 when valid, 1 otherwise
pub fn exit_status(report: &ValidationReport) -> u8 {
    if report.is_valid {
        0
    } else {
        1
    }
}

/// Exit code for a validation verdict
pub fn exit_code(report: &ValidationReport) -> ExitCode {
    ExitCode::from(exit_status(report))
}

/// Load and validate `path`, writing the report to the given streams
pub fn validate_to<O: Write, E: Write>(
    path: &Path,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<ValidationReport> {
    let registry = load_registry(path)?;
    let report = validate_document(&registry);
    report
        .write_to(out, err)
        .context("Failed to write validation report")?;
    Ok(report)
}

/// `mcpreg validate`
pub fn validate(path: &Path) -> anyhow::Result<ExitCode> {
    let report = validate_to(path, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(exit_code(&report))
}

/// `mcpreg serve`
pub fn serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let path = args.registry_path();
    let registry = load_registry(&path)?;

    let report = validate_document(&registry);
    if report.is_valid {
        info!("[Registry] {} is valid", path.display());
    } else if args.skip_validation {
        warn!(
            "[Registry] {} has {} validation errors; serving anyway",
            path.display(),
            report.errors().count()
        );
    } else {
        report.print().context("Failed to write validation report")?;
        return Ok(exit_code(&report));
    }

    let server = RegistryApiServer::new(args.api_config(), registry);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(server.run())?;

    Ok(ExitCode::SUCCESS)
}
