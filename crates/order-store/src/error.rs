use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing raw storage slots.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key cannot be used as a storage slot name.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A filesystem operation failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The stored blob could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
