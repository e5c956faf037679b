//! # Store Error Types
//!
//! Error types for load and save operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and categorization      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the CLI)                                                 │
//! │       │                                                                 │
//! │       ├── at startup: printed, process exits non-zero                  │
//! │       └── after a mutation: printed, menu continues                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming the file failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Parent directory can't be created
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid inventory document.
    #[error("Inventory file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// The file was written by a format version this build doesn't read.
    #[error("Unsupported inventory file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The item list could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// The file doesn't exist and the store was told not to create it.
    #[error("Inventory file not found: {0}")]
    NotFound(PathBuf),
}

impl StoreError {
    /// Creates an Io error for a given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Corrupt error for a given path.
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_file() {
        let err = StoreError::corrupt("/tmp/inventory.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Inventory file /tmp/inventory.json is corrupt: expected value at line 1"
        );

        let err = StoreError::io(
            "/tmp/inventory.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("I/O error on /tmp/inventory.json"));
    }
}
