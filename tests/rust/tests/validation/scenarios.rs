//! Reference registry documents and their expected verdicts

use mcpreg_core::{load_registry, validate};
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::assertions::{error_messages, server_blocks};
use tests::files::TestRegistryFile;

fn echo_registry() -> serde_json::Value {
    json!({
        "metadata": { "version": "1.0", "formatVersion": "2024-01", "count": 1 },
        "servers": [{
            "server": {
                "name": "echo",
                "description": "d",
                "version": "1.0",
                "packages": [{
                    "identifier": "pkg-echo",
                    "version": "1.0",
                    "transport": { "type": "stdio" }
                }],
                "remotes": []
            }
        }]
    })
}

fn validate_file(value: &serde_json::Value) -> mcpreg_core::ValidationReport {
    let file = TestRegistryFile::with_json(value);
    let registry = load_registry(&file.path).unwrap();
    validate(&registry)
}

#[test]
fn single_stdio_server_is_valid_with_remotes_warning() {
    let report = validate_file(&echo_registry());

    assert!(report.is_valid);
    assert_eq!(error_messages(&report), Vec::<&str>::new());
    let warnings: Vec<_> = report.warnings().map(|l| l.message.as_str()).collect();
    assert_eq!(warnings, vec!["No remotes defined"]);
    assert!(report.contains("Registry is VALID and ready for use"));
}

#[test]
fn count_mismatch_is_reported() {
    let mut registry = echo_registry();
    registry["metadata"]["count"] = json!(2);
    let report = validate_file(&registry);

    assert!(!report.is_valid);
    assert_eq!(
        error_messages(&report),
        vec!["Server count mismatch: metadata says 2, but found 1"]
    );
    assert!(report.contains("Registry has ERRORS"));
}

#[test]
fn missing_metadata_fields_are_listed() {
    let mut registry = echo_registry();
    registry["metadata"] = json!({ "version": "1.0" });
    let report = validate_file(&registry);

    assert!(!report.is_valid);
    assert!(report.contains("Missing metadata fields: formatVersion, count"));
}

#[test]
fn servers_string_short_circuits_server_checks() {
    let mut registry = echo_registry();
    registry["servers"] = json!("not-an-array");
    let report = validate_file(&registry);

    assert!(!report.is_valid);
    assert_eq!(
        error_messages(&report),
        vec!["Servers is not a valid array"]
    );
    assert_eq!(server_blocks(&report), 0);
}

#[test]
fn package_without_transport_is_an_error() {
    let mut registry = echo_registry();
    registry["servers"][0]["server"]["packages"] = json!([{ "identifier": "x", "version": "1.0" }]);
    let report = validate_file(&registry);

    assert!(!report.is_valid);
    assert_eq!(
        error_messages(&report),
        vec!["Missing transport configuration"]
    );
}

#[test]
fn string_packages_is_inspected_like_a_list() {
    let mut registry = echo_registry();
    registry["servers"][0]["server"]["packages"] = json!("@github/mcp-server");
    let report = validate_file(&registry);

    assert!(!report.is_valid);
    assert!(report.contains("Package: undefined (undefined)"));
    assert_eq!(error_messages(&report), vec!["Missing transport configuration"]);
}

#[test]
fn failing_verdict_is_written_to_stdout() {
    let mut registry = echo_registry();
    registry["metadata"]["count"] = json!(2);
    let report = validate_file(&registry);

    let mut out = Vec::new();
    let mut err = Vec::new();
    report.write_to(&mut out, &mut err).unwrap();
    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();

    assert!(out.ends_with("\n=== Result ===\n✗ Registry has ERRORS\n"));
    assert_eq!(
        err,
        "✗ Server count mismatch: metadata says 2, but found 1\n  ⚠ No remotes defined\n"
    );
}

#[test]
fn empty_packages_skips_package_block() {
    let mut registry = echo_registry();
    registry["servers"][0]["server"]["packages"] = json!([]);
    let report = validate_file(&registry);

    assert!(report.is_valid);
    assert!(!report.lines.iter().any(|l| l.message.starts_with("Package:")));
}

#[test]
fn rendered_report_matches_console_layout() {
    let report = validate_file(&echo_registry());
    let rendered: Vec<String> = report.render().into_iter().map(|(_, text)| text).collect();

    assert_eq!(
        rendered,
        vec![
            "=== MCP Registry Validation ===",
            "",
            "Checking metadata...",
            "✓ Metadata has all required fields",
            "  - version: 1.0",
            "  - formatVersion: 2024-01",
            "  - count: 1",
            "",
            "Checking servers array...",
            "✓ Servers array is valid",
            "",
            "Server 1:",
            "  ✓ Name: echo",
            "  ✓ Version: 1.0",
            "  ✓ Package: pkg-echo (1.0)",
            "  ✓ Transport: stdio",
            "  ⚠ No remotes defined",
            "",
            "=== Result ===",
            "✓ Registry is VALID and ready for use",
        ]
    );
}
