//! Nested transaction engine with savepoint support.

use crate::error::{CoreError, CoreResult};
use std::collections::HashMap;
use tracing::debug;

/// All-or-nothing execution of units of work over named mutable values,
/// with nesting support.
///
/// The engine is a domain-free primitive: it is generic over the snapshot
/// value type `V` and knows nothing about what the snapshots represent.
/// Callers record the pre-transaction state of a value with
/// [`save_state`](Self::save_state) before mutating it; the first snapshot
/// recorded for a key within a transaction wins.
///
/// Nested [`execute`](Self::execute) calls push a savepoint (a copy of the
/// current rollback-snapshot map). An inner failure restores the rollback
/// map to the savepoint and propagates the error, so the undo is confined
/// to state recorded since the savepoint while the outer transaction still
/// observes the failure.
///
/// # Rollback semantics
///
/// `rollback` discards the engine's bookkeeping only — it never writes
/// saved snapshots back into the live values. Atomicity of the owning
/// store therefore rests on validating every input *before* the first
/// mutation, which is the contract all pondplan mutators follow.
#[derive(Debug)]
pub struct TransactionEngine<V> {
    /// Whether a transaction is currently active.
    active: bool,
    /// Key -> earliest-seen copy of the value within the current transaction.
    rollback: HashMap<String, V>,
    /// Savepoints pushed on nested entry, innermost last.
    savepoints: Vec<HashMap<String, V>>,
}

impl<V> Default for TransactionEngine<V> {
    fn default() -> Self {
        Self {
            active: false,
            rollback: HashMap::new(),
            savepoints: Vec::new(),
        }
    }
}

impl<V: Clone> TransactionEngine<V> {
    /// Creates a new engine with no active transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes `operation` within a transaction context.
    ///
    /// If no transaction is active, one is begun, committed on success and
    /// rolled back on failure. If a transaction is already active the call
    /// is nested: a savepoint is pushed before the operation runs and
    /// popped afterwards — discarded on success, restored as the current
    /// rollback map on failure.
    ///
    /// # Errors
    ///
    /// Propagates the operation's error untouched.
    pub fn execute<T, F>(&mut self, operation: F) -> CoreResult<T>
    where
        F: FnOnce(&mut Self) -> CoreResult<T>,
    {
        if self.active {
            return self.execute_nested(operation);
        }

        self.begin()?;
        match operation(self) {
            Ok(result) => {
                self.commit()?;
                Ok(result)
            }
            Err(err) => {
                self.rollback()?;
                Err(err)
            }
        }
    }

    fn execute_nested<T, F>(&mut self, operation: F) -> CoreResult<T>
    where
        F: FnOnce(&mut Self) -> CoreResult<T>,
    {
        let savepoint = self.rollback.clone();
        self.savepoints.push(savepoint);
        debug!(depth = self.savepoints.len(), "savepoint pushed");

        match operation(self) {
            Ok(result) => {
                self.savepoints.pop();
                Ok(result)
            }
            Err(err) => {
                if let Some(savepoint) = self.savepoints.pop() {
                    self.rollback = savepoint;
                }
                debug!("restored rollback state to savepoint");
                Err(err)
            }
        }
    }

    /// Begins a new transaction.
    ///
    /// # Errors
    ///
    /// Returns an invalid-operation error if a transaction is already
    /// active.
    pub fn begin(&mut self) -> CoreResult<()> {
        if self.active {
            return Err(CoreError::invalid_operation("transaction already active"));
        }
        self.rollback.clear();
        self.active = true;
        debug!("transaction begun");
        Ok(())
    }

    /// Commits the current transaction, clearing all bookkeeping.
    ///
    /// # Errors
    ///
    /// Returns an invalid-operation error if no transaction is active.
    pub fn commit(&mut self) -> CoreResult<()> {
        if !self.active {
            return Err(CoreError::invalid_operation(
                "no active transaction to commit",
            ));
        }
        self.active = false;
        self.rollback.clear();
        self.savepoints.clear();
        debug!("transaction committed");
        Ok(())
    }

    /// Rolls back the current transaction.
    ///
    /// Clears the rollback map and savepoint stack; see the type-level
    /// documentation for what rollback does and does not restore.
    ///
    /// # Errors
    ///
    /// Returns an invalid-operation error if no transaction is active.
    pub fn rollback(&mut self) -> CoreResult<()> {
        if !self.active {
            return Err(CoreError::invalid_operation(
                "no active transaction to rollback",
            ));
        }
        self.active = false;
        self.rollback.clear();
        self.savepoints.clear();
        debug!("transaction rolled back");
        Ok(())
    }

    /// Records the pre-transaction copy of a value.
    ///
    /// A no-op when no transaction is active, and when the key already has
    /// a snapshot in the current transaction (the earliest-seen value is
    /// preserved).
    pub fn save_state(&mut self, key: &str, value: &V) {
        if self.active && !self.rollback.contains_key(key) {
            self.rollback.insert(key.to_string(), value.clone());
        }
    }

    /// Returns the saved snapshot for `key`, if any.
    #[must_use]
    pub fn rollback_state(&self, key: &str) -> Option<&V> {
        self.rollback.get(key)
    }

    /// Checks whether a transaction is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current nesting depth (number of open savepoints).
    #[must_use]
    pub fn savepoint_depth(&self) -> usize {
        self.savepoints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TransactionEngine<Vec<u32>> {
        TransactionEngine::new()
    }

    #[test]
    fn new_engine_is_inactive() {
        let engine = engine();
        assert!(!engine.is_active());
        assert_eq!(engine.savepoint_depth(), 0);
    }

    #[test]
    fn begin_activates() {
        let mut engine = engine();
        engine.begin().unwrap();
        assert!(engine.is_active());
    }

    #[test]
    fn begin_while_active_fails() {
        let mut engine = engine();
        engine.begin().unwrap();
        let result = engine.begin();
        assert!(matches!(result, Err(CoreError::InvalidOperation { .. })));
    }

    #[test]
    fn commit_without_transaction_fails() {
        let mut engine = engine();
        let result = engine.commit();
        assert!(matches!(result, Err(CoreError::InvalidOperation { .. })));
    }

    #[test]
    fn rollback_without_transaction_fails() {
        let mut engine = engine();
        let result = engine.rollback();
        assert!(matches!(result, Err(CoreError::InvalidOperation { .. })));
    }

    #[test]
    fn commit_clears_bookkeeping() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("stock", &vec![1, 2, 3]);
        engine.commit().unwrap();

        assert!(!engine.is_active());
        assert!(engine.rollback_state("stock").is_none());
    }

    #[test]
    fn execute_commits_on_success() {
        let mut engine = engine();
        let result = engine
            .execute(|tx| {
                tx.save_state("stock", &vec![1]);
                Ok(42)
            })
            .unwrap();

        assert_eq!(result, 42);
        assert!(!engine.is_active());
        assert!(engine.rollback_state("stock").is_none());
    }

    #[test]
    fn execute_rolls_back_on_failure() {
        let mut engine = engine();
        let result: CoreResult<()> = engine.execute(|tx| {
            tx.save_state("stock", &vec![1]);
            Err(CoreError::validation("boom"))
        });

        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(!engine.is_active());
        assert!(engine.rollback_state("stock").is_none());
    }

    #[test]
    fn save_state_outside_transaction_is_noop() {
        let mut engine = engine();
        engine.save_state("stock", &vec![1]);
        assert!(engine.rollback_state("stock").is_none());
    }

    #[test]
    fn save_state_preserves_earliest_value() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("stock", &vec![1]);
        engine.save_state("stock", &vec![2]);

        assert_eq!(engine.rollback_state("stock"), Some(&vec![1]));
    }

    #[test]
    fn saved_state_is_a_deep_copy() {
        let mut engine = engine();
        let mut live = vec![1, 2];
        engine.begin().unwrap();
        engine.save_state("stock", &live);
        live.push(3);

        assert_eq!(engine.rollback_state("stock"), Some(&vec![1, 2]));
    }

    #[test]
    fn nested_execute_discards_savepoint_on_success() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("outer", &vec![1]);

        engine
            .execute(|tx| {
                tx.save_state("inner", &vec![2]);
                Ok(())
            })
            .unwrap();

        assert!(engine.is_active());
        assert_eq!(engine.savepoint_depth(), 0);
        assert_eq!(engine.rollback_state("inner"), Some(&vec![2]));
    }

    #[test]
    fn nested_failure_restores_presavepoint_state_and_propagates() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("outer", &vec![1]);

        let result: CoreResult<()> = engine.execute(|tx| {
            tx.save_state("inner", &vec![2]);
            Err(CoreError::validation("inner failed"))
        });

        assert!(matches!(result, Err(CoreError::Validation { .. })));
        // Still inside the outer transaction; inner bookkeeping undone.
        assert!(engine.is_active());
        assert_eq!(engine.savepoint_depth(), 0);
        assert_eq!(engine.rollback_state("outer"), Some(&vec![1]));
        assert!(engine.rollback_state("inner").is_none());
    }

    #[test]
    fn doubly_nested_failure_unwinds_one_level() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("level0", &vec![0]);

        engine
            .execute(|tx| {
                tx.save_state("level1", &vec![1]);
                let inner: CoreResult<()> = tx.execute(|tx| {
                    tx.save_state("level2", &vec![2]);
                    Err(CoreError::validation("deepest failed"))
                });
                assert!(inner.is_err());
                // level2's snapshot is gone, level1's survives.
                assert_eq!(tx.rollback_state("level1"), Some(&vec![1]));
                assert!(tx.rollback_state("level2").is_none());
                Ok(())
            })
            .unwrap();

        assert!(engine.is_active());
        assert_eq!(engine.rollback_state("level0"), Some(&vec![0]));
    }

    #[test]
    fn outer_transaction_sees_nested_error() {
        let mut engine = engine();
        let result: CoreResult<()> = engine.execute(|tx| {
            tx.save_state("outer", &vec![1]);
            tx.execute(|tx| {
                tx.save_state("inner", &vec![2]);
                Err(CoreError::validation("inner failed"))
            })
        });

        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(!engine.is_active());
    }

    #[test]
    fn begin_after_commit_starts_fresh() {
        let mut engine = engine();
        engine.begin().unwrap();
        engine.save_state("stock", &vec![1]);
        engine.commit().unwrap();

        engine.begin().unwrap();
        assert!(engine.rollback_state("stock").is_none());
    }
}
