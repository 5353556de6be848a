//! In-memory pond store for testing.

use crate::error::{StoreError, StoreResult};
use crate::saved::{PondSummary, SavedPond};
use crate::store::{sanitize_name, PondStore};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A pond store backed by a map.
///
/// Suitable for unit tests and ephemeral sessions; nothing survives the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ponds: Mutex<BTreeMap<String, SavedPond>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ponds.lock().expect("store lock poisoned").len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PondStore for MemoryStore {
    fn save(&self, pond: &SavedPond) -> StoreResult<String> {
        let key = sanitize_name(&pond.name);
        self.ponds
            .lock()
            .expect("store lock poisoned")
            .insert(key.clone(), pond.clone());
        Ok(key)
    }

    fn load(&self, name: &str) -> StoreResult<SavedPond> {
        self.ponds
            .lock()
            .expect("store lock poisoned")
            .get(&sanitize_name(name))
            .cloned()
            .ok_or_else(|| StoreError::not_found(name))
    }

    fn list(&self) -> StoreResult<Vec<PondSummary>> {
        let ponds = self.ponds.lock().expect("store lock poisoned");
        let mut summaries: Vec<PondSummary> = ponds
            .iter()
            .map(|(key, pond)| PondSummary::from_saved(key.clone(), pond))
            .collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete(&self, name: &str) -> StoreResult<bool> {
        Ok(self
            .ponds
            .lock()
            .expect("store lock poisoned")
            .remove(&sanitize_name(name))
            .is_some())
    }

    fn exists(&self, name: &str) -> bool {
        self.ponds
            .lock()
            .expect("store lock poisoned")
            .contains_key(&sanitize_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pondplan_core::{Dimensions, StockMap};

    fn sample(name: &str) -> SavedPond {
        SavedPond::new(
            name,
            "",
            Dimensions::new(5.0, 3.0, 1.5, "rectangular"),
            StockMap::new(),
        )
    }

    #[test]
    fn save_load_roundtrip() {
        let store = MemoryStore::new();
        let pond = sample("Garden Pond");
        store.save(&pond).unwrap();

        assert_eq!(store.load("Garden Pond").unwrap(), pond);
    }

    #[test]
    fn names_collide_after_sanitization() {
        let store = MemoryStore::new();
        store.save(&sample("my pond")).unwrap();
        store.save(&sample("my_pond")).unwrap();

        // Both names sanitize to the same key.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_reports_presence() {
        let store = MemoryStore::new();
        store.save(&sample("Garden Pond")).unwrap();

        assert!(store.delete("Garden Pond").unwrap());
        assert!(!store.delete("Garden Pond").unwrap());
    }

    #[test]
    fn load_missing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.load("nope"),
            Err(StoreError::NotFound { .. })
        ));
    }
}
