//! Error types for escala-store.

use std::path::PathBuf;

/// Error type for all fallible operations in the escala-store crate.
///
/// This enum covers filesystem failures and serialisation errors from the
/// JSON assignment files and the TOML roster.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a filesystem error.
    #[error("io error: {reason}")]
    Io {
        /// Description of the underlying filesystem failure.
        reason: String,
    },

    /// Wraps an error from JSON serialisation or deserialisation.
    #[error("json error: {reason}")]
    Json {
        /// Description of the underlying JSON failure.
        reason: String,
    },

    /// Wraps an error from TOML deserialisation.
    #[error("toml error: {reason}")]
    Toml {
        /// Description of the underlying TOML failure.
        reason: String,
    },
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json {
            reason: e.to_string(),
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(e: toml::de::Error) -> Self {
        StoreError::Toml {
            reason: e.to_string(),
        }
    }
}
