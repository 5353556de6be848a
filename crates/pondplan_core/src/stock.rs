//! Validated, transactional fish stock inventory.

use crate::config::StockLimits;
use crate::error::{CoreError, CoreResult};
use crate::transaction::TransactionEngine;
use pondplan_catalog::{CatalogError, SpeciesCatalog};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Species key -> stocked quantity.
pub type StockMap = BTreeMap<String, u32>;

/// Rollback key used for the stock map.
const STOCK_KEY: &str = "stock";

/// Mutable fish inventory with validation and transaction support.
///
/// Every mutator runs as an operation inside the manager's
/// [`TransactionEngine`], with all validation performed before the first
/// mutation. Species keys are case-insensitive and stored lowercased.
///
/// Invariant: after any successful public call, no key maps to a zero
/// quantity.
pub struct StockManager {
    stock: StockMap,
    engine: TransactionEngine<StockMap>,
    species: Arc<dyn SpeciesCatalog>,
    limits: StockLimits,
}

impl StockManager {
    /// Creates an empty stock manager with default limits.
    pub fn new(species: Arc<dyn SpeciesCatalog>) -> Self {
        Self::with_limits(species, StockLimits::default())
    }

    /// Creates an empty stock manager with the given limits.
    pub fn with_limits(species: Arc<dyn SpeciesCatalog>, limits: StockLimits) -> Self {
        Self {
            stock: StockMap::new(),
            engine: TransactionEngine::new(),
            species,
            limits,
        }
    }

    /// Adds fish to the stock.
    ///
    /// Quantities for the same species accumulate.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range quantity, or a
    /// species-not-found error for an unknown species. On error the stock
    /// is unchanged.
    pub fn add(&mut self, species: &str, quantity: u32) -> CoreResult<()> {
        let Self {
            stock,
            engine,
            species: catalog,
            limits,
        } = self;
        let key = species.to_lowercase();
        engine.execute(|tx| {
            limits.check_quantity(quantity)?;
            if !catalog.exists(&key) {
                return Err(CatalogError::species_not_found(species).into());
            }

            tx.save_state(STOCK_KEY, stock);
            let entry = stock.entry(key).or_insert(0);
            *entry = entry.saturating_add(quantity);
            Ok(())
        })?;
        debug!(species, quantity, "fish added to stock");
        Ok(())
    }

    /// Removes fish from the stock.
    ///
    /// Removing more than the current quantity deletes the entry entirely;
    /// removing an absent species is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range quantity. On error
    /// the stock is unchanged.
    pub fn remove(&mut self, species: &str, quantity: u32) -> CoreResult<()> {
        let Self {
            stock,
            engine,
            limits,
            ..
        } = self;
        let key = species.to_lowercase();
        engine.execute(|tx| {
            limits.check_quantity(quantity)?;
            let Some(&current) = stock.get(&key) else {
                return Ok(()); // Nothing to remove
            };

            tx.save_state(STOCK_KEY, stock);
            let remaining = current.saturating_sub(quantity);
            if remaining == 0 {
                stock.remove(&key);
            } else {
                stock.insert(key, remaining);
            }
            Ok(())
        })?;
        debug!(species, quantity, "fish removed from stock");
        Ok(())
    }

    /// Adds multiple species in a single atomic operation.
    ///
    /// The entire batch is validated — every quantity in bounds, every
    /// species present in the catalog — before any mutation. Either all
    /// additions apply or the stock is left completely unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first validation or species-not-found error encountered.
    pub fn bulk_add(&mut self, additions: &StockMap) -> CoreResult<()> {
        let Self {
            stock,
            engine,
            species: catalog,
            limits,
        } = self;
        engine.execute(|tx| {
            for (key, &quantity) in additions {
                limits.check_quantity(quantity).map_err(|err| {
                    CoreError::validation(format!("invalid stock data: {key}: {err}"))
                })?;
            }
            for key in additions.keys() {
                if !catalog.exists(key) {
                    return Err(CatalogError::species_not_found(key).into());
                }
            }

            tx.save_state(STOCK_KEY, stock);
            for (key, &quantity) in additions {
                let entry = stock.entry(key.to_lowercase()).or_insert(0);
                *entry = entry.saturating_add(quantity);
            }
            Ok(())
        })?;
        debug!(entries = additions.len(), "bulk addition applied");
        Ok(())
    }

    /// Returns a defensive copy of the current stock.
    #[must_use]
    pub fn stock(&self) -> StockMap {
        self.stock.clone()
    }

    /// Borrows the live stock map for read-only aggregation.
    pub(crate) fn current(&self) -> &StockMap {
        &self.stock
    }

    /// Clears the entire stock. Immediate, non-transactional.
    pub fn clear(&mut self) {
        self.stock.clear();
    }

    /// Returns the total number of individuals across all species.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.stock.values().map(|&quantity| u64::from(quantity)).sum()
    }

    /// Checks whether a species is present in the stock (case-insensitive).
    #[must_use]
    pub fn has(&self, species: &str) -> bool {
        self.stock.contains_key(&species.to_lowercase())
    }
}

impl std::fmt::Debug for StockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockManager")
            .field("stock", &self.stock)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pondplan_catalog::{MemorySpeciesCatalog, Species};

    fn species(name: &str, bioload: f64, min_liters: f64) -> Species {
        Species {
            name: name.to_string(),
            adult_length_cm: 20.0,
            bioload_factor: bioload,
            min_liters_per_fish: min_liters,
        }
    }

    fn manager() -> StockManager {
        let catalog = MemorySpeciesCatalog::from_entries([
            ("goldfish", species("Goldfish", 1.0, 75.0)),
            ("koi", species("Koi", 2.5, 950.0)),
        ])
        .unwrap();
        StockManager::new(Arc::new(catalog))
    }

    #[test]
    fn add_accumulates() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.add("goldfish", 3).unwrap();

        assert_eq!(manager.stock().get("goldfish"), Some(&8));
    }

    #[test]
    fn add_is_case_insensitive() {
        let mut manager = manager();
        manager.add("GoldFish", 5).unwrap();

        assert!(manager.has("GOLDFISH"));
        assert_eq!(manager.stock().get("goldfish"), Some(&5));
    }

    #[test]
    fn add_unknown_species_fails() {
        let mut manager = manager();
        let result = manager.add("shark", 1);
        assert!(matches!(
            result,
            Err(CoreError::Catalog(CatalogError::SpeciesNotFound { .. }))
        ));
        assert!(manager.stock().is_empty());
    }

    #[test]
    fn add_zero_quantity_fails() {
        let mut manager = manager();
        let result = manager.add("goldfish", 0);
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn add_over_limit_fails() {
        let mut manager = manager();
        let result = manager.add("goldfish", 10_001);
        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(manager.stock().is_empty());
    }

    #[test]
    fn remove_decrements() {
        let mut manager = manager();
        manager.add("goldfish", 10).unwrap();
        manager.remove("goldfish", 3).unwrap();

        assert_eq!(manager.stock().get("goldfish"), Some(&7));
    }

    #[test]
    fn remove_more_than_current_deletes_entry() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.remove("goldfish", 10).unwrap();

        assert!(!manager.has("goldfish"));
    }

    #[test]
    fn remove_exact_quantity_deletes_entry() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.remove("goldfish", 5).unwrap();

        assert!(manager.stock().is_empty());
    }

    #[test]
    fn remove_absent_species_is_noop() {
        let mut manager = manager();
        manager.remove("goldfish", 5).unwrap();
        assert!(manager.stock().is_empty());
    }

    #[test]
    fn remove_invalid_quantity_fails() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        let result = manager.remove("goldfish", 0);
        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert_eq!(manager.stock().get("goldfish"), Some(&5));
    }

    #[test]
    fn bulk_add_applies_all() {
        let mut manager = manager();
        let batch = StockMap::from([("goldfish".to_string(), 10), ("koi".to_string(), 3)]);
        manager.bulk_add(&batch).unwrap();

        assert_eq!(manager.stock().get("goldfish"), Some(&10));
        assert_eq!(manager.stock().get("koi"), Some(&3));
    }

    #[test]
    fn bulk_add_with_unknown_species_is_atomic() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        let before = manager.stock();

        let batch = StockMap::from([("koi".to_string(), 3), ("shark".to_string(), 1)]);
        let result = manager.bulk_add(&batch);

        assert!(result.is_err());
        assert_eq!(manager.stock(), before);
    }

    #[test]
    fn bulk_add_with_bad_quantity_is_atomic() {
        let mut manager = manager();
        let batch = StockMap::from([("goldfish".to_string(), 10), ("koi".to_string(), 0)]);
        let result = manager.bulk_add(&batch);

        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(manager.stock().is_empty());
    }

    #[test]
    fn stock_returns_independent_copies() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();

        let mut first = manager.stock();
        let second = manager.stock();
        first.insert("goldfish".to_string(), 999);

        assert_eq!(second.get("goldfish"), Some(&5));
        assert_eq!(manager.stock().get("goldfish"), Some(&5));
    }

    #[test]
    fn count_sums_individuals() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.add("koi", 3).unwrap();

        assert_eq!(manager.count(), 8);
    }

    #[test]
    fn clear_resets_stock() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.clear();

        assert_eq!(manager.count(), 0);
        assert!(manager.stock().is_empty());
    }

    #[test]
    fn no_zero_quantities_after_operations() {
        let mut manager = manager();
        manager.add("goldfish", 5).unwrap();
        manager.add("koi", 2).unwrap();
        manager.remove("goldfish", 5).unwrap();
        manager.remove("koi", 1).unwrap();

        assert!(manager.stock().values().all(|&quantity| quantity > 0));
    }
}
