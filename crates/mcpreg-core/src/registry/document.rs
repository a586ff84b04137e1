//! Registry document access
//!
//! The registry is kept as raw JSON and read through borrowed views, so that
//! presence checks see exactly what the file contains. Supported shape:
//!
//! ```json
//! {
//!   "metadata": { "version": "1.0", "formatVersion": "2024-01", "count": 1 },
//!   "servers": [
//!     { "server": { "name": "echo", "description": "...", "version": "1.0",
//!                   "packages": [{ "identifier": "pkg-echo", "version": "1.0",
//!                                  "transport": { "type": "stdio" } }],
//!                   "remotes": [{ "type": "sse", "url": "https://..." }] } }
//!   ]
//! }
//! ```

use serde_json::Value;

use super::value::{display_value, is_present};

/// Metadata fields every registry must carry
pub const REQUIRED_METADATA_FIELDS: [&str; 3] = ["version", "formatVersion", "count"];

/// Fields every server descriptor must carry
pub const REQUIRED_SERVER_FIELDS: [&str; 4] = ["name", "description", "version", "packages"];

/// A loaded registry document
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryDocument {
    raw: Value,
}

impl RegistryDocument {
    /// Wrap an already decoded JSON value
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Decode a document from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// The `metadata` block (empty view when absent or not an object)
    pub fn metadata(&self) -> FieldView<'_> {
        FieldView::new(self.raw.get("metadata"))
    }

    /// The `servers` array, or `None` when it is absent or not an array
    pub fn servers(&self) -> Option<&[Value]> {
        self.raw
            .get("servers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Read-only view over a JSON object whose fields are checked for presence
///
/// A view over anything other than an object behaves as an object with no
/// fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    value: Option<&'a Value>,
}

impl<'a> FieldView<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self { value }
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value
            .and_then(Value::as_object)
            .and_then(|obj| obj.get(key))
    }

    /// Check whether a field is present (see [`is_present`])
    pub fn has(&self, key: &str) -> bool {
        is_present(self.get(key))
    }

    /// Return the subset of `fields` that are missing, in the given order
    pub fn missing(&self, fields: &[&'static str]) -> Vec<&'static str> {
        fields.iter().copied().filter(|f| !self.has(f)).collect()
    }

    /// Render a field for display
    pub fn display(&self, key: &str) -> String {
        display_value(self.get(key))
    }

    /// A nested view over one of this object's fields
    pub fn child(&self, key: &str) -> FieldView<'a> {
        FieldView::new(self.get(key))
    }

    /// A field's elements when it is an array, otherwise an empty slice
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One element of the `servers` array
#[derive(Debug, Clone, Copy)]
pub struct ServerEntry<'a> {
    server: FieldView<'a>,
}

impl<'a> ServerEntry<'a> {
    pub fn new(entry: &'a Value) -> Self {
        Self {
            server: FieldView::new(entry.get("server")),
        }
    }

    /// The wrapped `server` descriptor
    pub fn server(&self) -> FieldView<'a> {
        self.server
    }

    /// The first package, when `packages` is a non-empty array or string
    ///
    /// Only this package is ever inspected. The first element of a string is
    /// a single character, which has no fields.
    pub fn first_package(&self) -> Option<FieldView<'a>> {
        match self.server.get("packages") {
            Some(Value::Array(packages)) => packages.first().map(|pkg| FieldView::new(Some(pkg))),
            Some(Value::String(s)) if !s.is_empty() => Some(FieldView::new(None)),
            _ => None,
        }
    }

    /// Remote endpoints (empty when absent or not an array)
    pub fn remotes(&self) -> impl Iterator<Item = FieldView<'a>> {
        self.server
            .list("remotes")
            .iter()
            .map(|remote| FieldView::new(Some(remote)))
    }

    pub fn remote_count(&self) -> usize {
        self.server.list("remotes").len()
    }
}
