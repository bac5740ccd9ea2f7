//! Error types for colormap resolution and export.

use std::path::PathBuf;

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, CmapError>;

#[derive(Debug, Error)]
pub enum CmapError {
    /// Requested name is not in the registry
    #[error("Unknown colormap '{name}'. Supported: {supported}")]
    UnknownColormap { name: String, supported: String },

    /// Output file could not be created, written or flushed
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid colormap definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Index {index} out of range for colormap '{name}' ({len} entries)")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CmapError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CmapError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_definition(name: &str, reason: impl Into<String>) -> Self {
        CmapError::InvalidDefinition {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error means the colormap name did not resolve
    pub fn is_unknown_colormap(&self) -> bool {
        matches!(self, CmapError::UnknownColormap { .. })
    }
}
