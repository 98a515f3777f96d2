//! Error types for fitsfetch
//!
//! All modules use `FetchResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fitsfetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// All errors that can occur in fitsfetch
#[derive(Error, Debug)]
pub enum FetchError {
    // Key errors
    #[error("Invalid cache key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    // Remote errors
    #[error("Object not found: {key} in bucket {bucket}")]
    RemoteNotFound { bucket: String, key: String },

    #[error("Transport error fetching {key}: {reason}")]
    RemoteTransport { key: String, reason: String },

    #[error("Integrity mismatch for {key}: expected {expected}, got {actual}")]
    IntegrityMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No bucket configured. Set remote.bucket in config or pass --bucket")]
    BucketNotConfigured,

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FetchError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a transport error for a key
    pub fn transport(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RemoteTransport {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if error is worth retrying (transient network failures only)
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RemoteTransport { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RemoteNotFound { .. } => {
                Some("Check the key spelling and that the object was uploaded")
            }
            Self::RemoteTransport { .. } => {
                Some("Check network connectivity; transient failures are retried automatically")
            }
            Self::BucketNotConfigured => Some("Run: fitsfetch config init"),
            _ => None,
        }
    }
}
