//! Error types for snapshot loading

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when reading a course snapshot from disk
///
/// Only file access and JSON syntax can fail; malformed lesson items inside
/// valid JSON are skipped by the normalizer instead.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The payload file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Read {
        /// File that was being read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload file is not valid JSON
    #[error("Failed to parse {path:?} as JSON: {source}")]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    /// Path of the file that failed
    pub fn path(&self) -> &Path {
        match self {
            SnapshotError::Read { path, .. } | SnapshotError::Parse { path, .. } => path.as_path(),
        }
    }

    /// Check if the file exists but holds something other than JSON
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SnapshotError::Parse { .. })
    }
}
