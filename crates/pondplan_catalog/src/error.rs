//! Error types for catalog operations.

use std::io;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading or querying catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A species key was not found in the catalog.
    #[error("unknown species: {name}")]
    SpeciesNotFound {
        /// The species key that was looked up.
        name: String,
    },

    /// A shape key was not found in the catalog.
    #[error("unknown shape '{name}'. Available shapes: {available}")]
    ShapeNotFound {
        /// The shape key that was looked up.
        name: String,
        /// Comma-separated list of valid shape keys.
        available: String,
    },

    /// A catalog entry failed validation at load time.
    #[error("invalid catalog entry for '{key}': {message}")]
    InvalidEntry {
        /// The entry key.
        key: String,
        /// Description of what is wrong with the entry.
        message: String,
    },

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A catalog file could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CatalogError {
    /// Creates a species-not-found error.
    pub fn species_not_found(name: impl Into<String>) -> Self {
        Self::SpeciesNotFound { name: name.into() }
    }

    /// Creates a shape-not-found error that enumerates the valid keys.
    pub fn shape_not_found(name: impl Into<String>, valid_keys: &[String]) -> Self {
        Self::ShapeNotFound {
            name: name.into(),
            available: valid_keys.join(", "),
        }
    }

    /// Creates an invalid-entry error.
    pub fn invalid_entry(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidEntry {
            key: key.into(),
            message: message.into(),
        }
    }
}
