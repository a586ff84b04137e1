//! MCP Server Registry
//!
//! This module covers the registry document: a `metadata` block and an
//! ordered `servers` array whose entries wrap a `server` descriptor.
//! Documents are loaded from a local JSON file, checked by [`validate`]
//! and served page by page by the registry API.

mod document;
mod loader;
mod pagination;
mod report;
mod validation;
mod value;

pub use document::*;
pub use loader::*;
pub use pagination::*;
pub use report::*;
pub use validation::*;
pub use value::{display_value, is_present};
