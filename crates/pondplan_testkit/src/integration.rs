//! Cross-crate integration test helpers.
//!
//! Exercises the planner, catalogs, and store together the way an
//! application would.

use crate::fixtures::test_planner;
use pondplan_core::{CoreResult, PondPlanner};
use pondplan_store::{MemoryStore, PondStore, SavedPond, StoreResult};

/// A planning session paired with a pond store.
pub struct SessionHarness {
    /// The planner under test.
    pub planner: PondPlanner,
    /// An in-memory store for save/restore flows.
    pub store: MemoryStore,
}

impl SessionHarness {
    /// Creates a harness wired to the sample catalogs and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            planner: test_planner(),
            store: MemoryStore::new(),
        }
    }

    /// Saves the current planner state under `name`.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn save(&self, name: &str, description: &str) -> StoreResult<String> {
        let dimensions = self
            .planner
            .dimensions()
            .cloned()
            .expect("dimensions set before saving");
        let snapshot = SavedPond::new(name, description, dimensions, self.planner.stock());
        self.store.save(&snapshot)
    }

    /// Restores planner state from the configuration saved under `name`.
    ///
    /// # Errors
    ///
    /// Propagates store and validation failures.
    pub fn load(&mut self, name: &str) -> CoreResult<()> {
        let snapshot = self.store.load(name).expect("configuration exists");
        self.planner.restore(snapshot.dimensions, &snapshot.stock)
    }
}

impl Default for SessionHarness {
    fn default() -> Self {
        Self::new()
    }
}
