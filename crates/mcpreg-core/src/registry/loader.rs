//! Loading registry documents from disk

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::document::RegistryDocument;

/// Failure to read or decode a registry file
///
/// These are fatal: no report is produced for a document that cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read registry file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("registry file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Path of the file that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Read a registry file as UTF-8 text and decode it as JSON
pub fn load_registry(path: impl AsRef<Path>) -> Result<RegistryDocument, LoadError> {
    let path = path.as_ref();
    debug!("[Registry] Loading {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    RegistryDocument::from_json_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
