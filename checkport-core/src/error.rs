//! Core error types for `checkport`.

use thiserror::Error;

/// Core error type for `checkport` operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The `type` field of a check had neither the list nor the detail shape.
    #[error("Unsupported check type shape: {0}")]
    UnsupportedCheckType(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
