//! Error types for pond configuration storage.

use std::io;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when saving or loading pond configurations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No configuration with the given name exists.
    #[error("pond configuration not found: {name}")]
    NotFound {
        /// The requested configuration name.
        name: String,
    },

    /// A configuration file holds invalid data.
    #[error("invalid pond configuration: {0}")]
    InvalidConfiguration(#[from] serde_json::Error),

    /// I/O error while reading or writing configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StoreError {
    /// Creates a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
