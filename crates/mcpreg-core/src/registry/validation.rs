//! Registry validation rules
//!
//! Checks run in a fixed order and every failure is recorded, so a single
//! pass reports all problems:
//!
//! 1. metadata fields
//! 2. `servers` is an array (failure skips all server checks)
//! 3. `servers` length matches `metadata.count`
//! 4. per-server fields, first package and remotes
//! 5. verdict

use serde_json::Value;
use tracing::debug;

use super::document::{
    FieldView, RegistryDocument, ServerEntry, REQUIRED_METADATA_FIELDS, REQUIRED_SERVER_FIELDS,
};
use super::report::ValidationReport;
use crate::branding;

/// Validate a registry document
///
/// Pure and reentrant: the document is only read, and the same document
/// always yields the same report.
pub fn validate(doc: &RegistryDocument) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.heading(branding::report_title());

    check_metadata(doc, &mut report);
    check_servers(doc, &mut report);

    report.heading("=== Result ===");
    if report.is_valid {
        report.success(0, "Registry is VALID and ready for use");
    } else {
        report.failure_verdict("Registry has ERRORS");
    }

    debug!(
        "[Registry] Validation finished: valid={}, errors={}, warnings={}",
        report.is_valid,
        report.errors().count(),
        report.warnings().count()
    );
    report
}

/// Decode JSON text and validate it
pub fn validate_registry_json(json: &str) -> Result<ValidationReport, serde_json::Error> {
    RegistryDocument::from_json_str(json).map(|doc| validate(&doc))
}

fn check_metadata(doc: &RegistryDocument, report: &mut ValidationReport) {
    report.heading("Checking metadata...");
    let metadata = doc.metadata();

    let missing = metadata.missing(&REQUIRED_METADATA_FIELDS);
    if !missing.is_empty() {
        debug!("[Registry] Metadata missing fields: {:?}", missing);
        report.error(0, format!("Missing metadata fields: {}", missing.join(", ")));
        return;
    }

    report.success(0, "Metadata has all required fields");
    for field in REQUIRED_METADATA_FIELDS {
        report.info(1, format!("- {}: {}", field, metadata.display(field)));
    }
}

fn check_servers(doc: &RegistryDocument, report: &mut ValidationReport) {
    report.heading("Checking servers array...");

    let Some(servers) = doc.servers() else {
        debug!("[Registry] 'servers' is absent or not an array");
        report.error(0, "Servers is not a valid array");
        return;
    };
    report.success(0, "Servers array is valid");

    let count = doc.metadata().get("count");
    if !count_matches(count, servers.len()) {
        report.error(
            0,
            format!(
                "Server count mismatch: metadata says {}, but found {}",
                doc.metadata().display("count"),
                servers.len()
            ),
        );
    }

    for (i, entry) in servers.iter().enumerate() {
        check_server(i + 1, ServerEntry::new(entry), report);
    }
}

/// `metadata.count` must be a number equal to the array length
fn count_matches(count: Option<&Value>, len: usize) -> bool {
    count
        .and_then(Value::as_f64)
        .map(|c| c == len as f64)
        .unwrap_or(false)
}

fn check_server(position: usize, entry: ServerEntry<'_>, report: &mut ValidationReport) {
    report.heading(format!("Server {}:", position));
    let server = entry.server();

    let missing = server.missing(&REQUIRED_SERVER_FIELDS);
    if missing.is_empty() {
        report.success(1, format!("Name: {}", server.display("name")));
        report.success(1, format!("Version: {}", server.display("version")));
    } else {
        debug!("[Registry] Server {} missing fields: {:?}", position, missing);
        report.error(1, format!("Missing: {}", missing.join(", ")));
    }

    if let Some(pkg) = entry.first_package() {
        check_package(pkg, report);
    }

    if entry.remote_count() > 0 {
        report.success(1, format!("Remotes: {}", entry.remote_count()));
        for remote in entry.remotes() {
            report.info(
                2,
                format!("- {}: {}", remote.display("type"), remote.display("url")),
            );
        }
    } else {
        report.warning(1, "No remotes defined");
    }
}

fn check_package(pkg: FieldView<'_>, report: &mut ValidationReport) {
    report.success(
        1,
        format!(
            "Package: {} ({})",
            pkg.display("identifier"),
            pkg.display("version")
        ),
    );

    if pkg.has("transport") {
        // Only the transport's presence is checked; its type is informational
        report.success(1, format!("Transport: {}", pkg.child("transport").display("type")));
    } else {
        report.error(1, "Missing transport configuration");
    }
}
