//! Centralized branding constants
//!
//! All product naming comes from this module.
//! Generated from branding.toml at build time.
//!
//! # Usage
//!
//! ```rust
//! use mcpreg_core::branding;
//!
//! println!("{}", branding::report_title()); // "=== MCP Registry Validation ==="
//! let url = branding::local_api_url(8000, "/v0.1/servers");
//! ```

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/branding_generated.rs"));

/// Title line printed at the top of every validation report
pub fn report_title() -> String {
    format!("=== {} Validation ===", DISPLAY_NAME)
}

/// Build a loopback URL for the registry API
///
/// # Example
/// ```ignore
/// let url = branding::local_api_url(8000, "/health");
/// // Returns: "http://localhost:8000/health"
/// ```
pub fn local_api_url(port: u16, path: &str) -> String {
    format!("http://localhost:{}/{}", port, path.trim_start_matches('/'))
}
