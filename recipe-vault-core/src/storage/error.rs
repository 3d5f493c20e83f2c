use std::io;
use std::path::PathBuf;
use thiserror::Error;

use super::StorageKey;

/// Errors that can occur reading or writing persisted entries.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stored text could not be decoded into the expected shape.
    #[error("Failed to decode '{key}': {source}")]
    Decode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded for storage.
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },

    /// Backend refused the operation (disabled, over quota, poisoned).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
