//! Build script that generates branding constants from branding.toml
//!
//! This reads the workspace-level branding.toml and generates Rust constants
//! that are included at compile time.

use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_DISPLAY_NAME: &str = "MCP Registry";
const DEFAULT_DOCUMENTATION_URL: &str = "https://github.com/mcpreg/mcp-registry";
const DEFAULT_LOG_PREFIX: &str = "mcpreg";
const DEFAULT_REGISTRY_FILE: &str = "registry.json";
const DEFAULT_API_PORT: u16 = 8000;

fn main() {
    // Re-run if branding.toml changes
    println!("cargo:rerun-if-changed=../../branding.toml");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    let branding_path = workspace_root.join("branding.toml");

    // Missing branding.toml falls back to the defaults above
    let content = fs::read_to_string(&branding_path).unwrap_or_default();

    let display_name = extract_toml_string(&content, "display_name").unwrap_or(DEFAULT_DISPLAY_NAME);
    let documentation_url =
        extract_toml_string(&content, "documentation_url").unwrap_or(DEFAULT_DOCUMENTATION_URL);
    let log_prefix = extract_toml_string(&content, "log_prefix").unwrap_or(DEFAULT_LOG_PREFIX);
    let registry_file =
        extract_toml_string(&content, "registry_file").unwrap_or(DEFAULT_REGISTRY_FILE);
    let api_port = extract_toml_string(&content, "api_port")
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_API_PORT);

    let out_dir = env::var("OUT_DIR").unwrap();
    let rust_path = Path::new(&out_dir).join("branding_generated.rs");

    let rust_code = format!(
        r#"// Auto-generated branding constants from branding.toml
// DO NOT EDIT - regenerate with `cargo build`

/// User-facing display name
pub const DISPLAY_NAME: &str = {display_name:?};

/// Documentation link advertised by the registry API
pub const DOCUMENTATION_URL: &str = {documentation_url:?};

/// Log file prefix
pub const LOG_PREFIX: &str = {log_prefix:?};

/// Registry document read when no path is given
pub const DEFAULT_REGISTRY_FILE: &str = {registry_file:?};

/// Port the registry API listens on by default
pub const DEFAULT_API_PORT: u16 = {api_port};
"#,
    );

    fs::write(&rust_path, rust_code).expect("Failed to write branding_generated.rs");
}

/// Extract a string value from TOML content (simple parser, no dependencies)
fn extract_toml_string<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        if name.trim() != key {
            continue;
        }
        let value = value.trim();
        // Remove quotes
        if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            return Some(&value[1..value.len() - 1]);
        }
    }
    None
}
