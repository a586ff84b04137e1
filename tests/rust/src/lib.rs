//! Shared test utilities and fixtures for MCP Registry integration tests.

pub use mcpreg_core::{RegistryDocument, Severity, ValidationReport};

/// Registry document fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    /// A server entry that passes every check
    pub fn server(name: &str) -> Value {
        json!({
            "server": {
                "name": name,
                "description": format!("{} MCP server", name),
                "version": "1.0.0",
                "packages": [{
                    "identifier": format!("pkg-{}", name),
                    "version": "1.0.0",
                    "transport": { "type": "stdio" }
                }],
                "remotes": [{
                    "type": "streamable-http",
                    "url": format!("https://{}.example.com/mcp", name)
                }]
            }
        })
    }

    /// A registry whose metadata count matches its servers
    pub fn registry_with(servers: Vec<Value>) -> Value {
        json!({
            "metadata": {
                "version": "1.0.0",
                "formatVersion": "2024-01",
                "count": servers.len()
            },
            "servers": servers
        })
    }

    /// A valid registry with `n` servers named `server-0`, `server-1`, ...
    pub fn registry(n: usize) -> Value {
        registry_with((0..n).map(|i| server(&format!("server-{}", i))).collect())
    }
}

/// Registry files on disk
pub mod files {
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// A temporary directory holding a `registry.json`
    pub struct TestRegistryFile {
        _dir: TempDir,
        pub path: PathBuf,
    }

    impl TestRegistryFile {
        pub fn with_text(text: &str) -> Self {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("registry.json");
            std::fs::write(&path, text).expect("Failed to write registry file");
            Self { _dir: dir, path }
        }

        pub fn with_json(value: &Value) -> Self {
            Self::with_text(&serde_json::to_string_pretty(value).expect("Failed to encode registry"))
        }
    }
}

/// Report assertions
pub mod assertions {
    use mcpreg_core::{Severity, ValidationReport};

    /// Messages of all error lines, in order
    pub fn error_messages(report: &ValidationReport) -> Vec<&str> {
        report.errors().map(|l| l.message.as_str()).collect()
    }

    /// Number of per-server blocks in the report
    pub fn server_blocks(report: &ValidationReport) -> usize {
        report
            .lines_with(Severity::Heading)
            .filter(|l| l.message.starts_with("Server ") && l.message.ends_with(':'))
            .count()
    }
}
