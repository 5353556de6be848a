//! Pond store trait definition.

use crate::error::StoreResult;
use crate::saved::{PondSummary, SavedPond};

/// Persistence boundary for pond configurations.
///
/// Stores key configurations by a sanitized form of the pond name. The
/// core never inspects the storage format; it hands a [`SavedPond`] over
/// and receives one back.
///
/// # Implementors
///
/// - [`crate::JsonFileStore`] — one JSON file per configuration
/// - [`crate::MemoryStore`] — for testing
pub trait PondStore: Send + Sync {
    /// Persists a configuration, overwriting any previous one with the
    /// same name. Returns the storage key (filename) used.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn save(&self, pond: &SavedPond) -> StoreResult<String>;

    /// Loads a configuration by name.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no such configuration exists, or an
    /// invalid-configuration error if the stored data cannot be decoded.
    fn load(&self, name: &str) -> StoreResult<SavedPond>;

    /// Lists all saved configurations, newest first.
    ///
    /// Unreadable entries are skipped rather than failing the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage location cannot be enumerated.
    fn list(&self) -> StoreResult<Vec<PondSummary>>;

    /// Deletes a configuration. Returns `false` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion itself fails.
    fn delete(&self, name: &str) -> StoreResult<bool>;

    /// Checks whether a configuration exists.
    fn exists(&self, name: &str) -> bool;
}

/// Derives a safe storage key from a pond name.
///
/// Keeps alphanumerics and `-_.`, maps spaces and anything else to `_`,
/// truncates to 50 characters and falls back to `pond` for empty input.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let mut safe: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    safe.truncate(50);
    if safe.is_empty() {
        safe.push_str("pond");
    }
    safe
}
