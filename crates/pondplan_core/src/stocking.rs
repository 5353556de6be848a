//! Stocking aggregation: required volume, bioload, and recommendations.

use crate::error::{CoreError, CoreResult};
use crate::stock::StockMap;
use pondplan_catalog::SpeciesCatalog;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Aggregates stock requirements against the species catalog.
pub struct StockingCalculator {
    species: Arc<dyn SpeciesCatalog>,
}

impl StockingCalculator {
    /// Creates a calculator backed by the given species catalog.
    pub fn new(species: Arc<dyn SpeciesCatalog>) -> Self {
        Self { species }
    }

    /// Total volume in liters required to house the given stock.
    ///
    /// Sums `min_liters_per_fish * quantity` over entries with a positive
    /// quantity. Returns 0.0 for an empty stock.
    ///
    /// # Errors
    ///
    /// Fails if a stocked species is missing from the catalog or carries a
    /// non-positive per-individual requirement.
    pub fn required_volume(&self, stock: &StockMap) -> CoreResult<f64> {
        let mut total = 0.0;
        for (key, &quantity) in stock {
            if quantity == 0 {
                continue;
            }
            let species = self.species.get(key)?;
            if species.min_liters_per_fish <= 0.0 {
                return Err(CoreError::validation(format!(
                    "species '{key}' has invalid min_liters_per_fish ({})",
                    species.min_liters_per_fish
                )));
            }
            total += species.min_liters_per_fish * f64::from(quantity);
        }
        Ok(total)
    }

    /// Total bioload of the given stock.
    ///
    /// Sums `bioload_factor * quantity` over entries with a positive
    /// quantity. Returns 0.0 for an empty stock.
    ///
    /// # Errors
    ///
    /// Fails if a stocked species is missing from the catalog or carries a
    /// non-positive bioload factor.
    pub fn bioload(&self, stock: &StockMap) -> CoreResult<f64> {
        let mut total = 0.0;
        for (key, &quantity) in stock {
            if quantity == 0 {
                continue;
            }
            let species = self.species.get(key)?;
            if species.bioload_factor <= 0.0 {
                return Err(CoreError::validation(format!(
                    "species '{key}' has invalid bioload_factor ({})",
                    species.bioload_factor
                )));
            }
            total += species.bioload_factor * f64::from(quantity);
        }
        Ok(total)
    }

    /// Maximum number of each catalog species the pond can hold.
    ///
    /// `max_count = floor(volume / min_liters_per_fish)` for every species
    /// with a valid positive requirement; invalid entries are silently
    /// skipped. Results are keyed by DISPLAY NAME, so two species sharing
    /// a display name overwrite one another — later iteration order wins.
    ///
    /// # Errors
    ///
    /// Fails if `volume_liters` is not positive.
    pub fn recommendations(&self, volume_liters: f64) -> CoreResult<BTreeMap<String, u64>> {
        if volume_liters <= 0.0 {
            return Err(CoreError::validation("pond volume must be positive"));
        }

        let mut recommendations = BTreeMap::new();
        for species in self.species.all().values() {
            if species.min_liters_per_fish <= 0.0 {
                continue; // Skip species with invalid requirements
            }
            let max_count = (volume_liters / species.min_liters_per_fish) as u64;
            recommendations.insert(species.name.clone(), max_count);
        }
        Ok(recommendations)
    }

    /// Whether the pond volume is adequate for the given stock.
    ///
    /// Equality counts as adequate.
    ///
    /// # Errors
    ///
    /// Propagates [`required_volume`](Self::required_volume) failures.
    pub fn validate_stocking(&self, stock: &StockMap, volume_liters: f64) -> CoreResult<bool> {
        let required = self.required_volume(stock)?;
        Ok(volume_liters >= required)
    }
}

impl std::fmt::Debug for StockingCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockingCalculator").finish_non_exhaustive()
    }
}
