//! Error types for core operations.

use pondplan_catalog::CatalogError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in pondplan core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An input failed validation (non-positive or out-of-range value,
    /// malformed batch).
    #[error("validation failed: {message}")]
    Validation {
        /// Description of what failed validation.
        message: String,
    },

    /// Transaction misuse: begin while active, or commit/rollback while
    /// inactive.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why the operation is invalid.
        message: String,
    },

    /// A computed result violated a post-condition.
    #[error("computation error: {message}")]
    Computation {
        /// Description of the failed computation.
        message: String,
    },

    /// A catalog lookup or load failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an invalid-operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Creates a computation error.
    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }
}
