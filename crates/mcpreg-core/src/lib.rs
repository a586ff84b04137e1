//! # MCP Registry Core Library
//!
//! Loading, validation and reporting for MCP registry documents.
//!
//! ## Modules
//!
//! - `branding` - Centralized branding constants (generated from branding.toml)
//! - `registry` - Registry document access, validation rules, report and pagination

pub mod branding;
pub mod registry;

// Re-export commonly used types
pub use registry::*;

use std::path::PathBuf;

/// Path of the registry document used when none is given
pub fn default_registry_path() -> PathBuf {
    PathBuf::from(branding::DEFAULT_REGISTRY_FILE)
}
