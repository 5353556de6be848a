//! Pond planner facade.

use crate::config::StockLimits;
use crate::dimensions::{Dimensions, DimensionsHolder};
use crate::equipment::{self, FilterRecommendation, PumpRecommendation};
use crate::error::{CoreError, CoreResult};
use crate::stock::{StockManager, StockMap};
use crate::stocking::StockingCalculator;
use crate::volume::VolumeCalculator;
use pondplan_catalog::{ShapeCatalog, SpeciesCatalog};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The main entry point for pond planning.
///
/// `PondPlanner` wires the read-only catalogs to the transactional stock
/// and dimensions stores and exposes the calculators against the current
/// state. One planner represents one logical session; mutators take
/// `&mut self`, so a session is driven from a single place.
///
/// # Example
///
/// ```rust,ignore
/// let mut planner = PondPlanner::new(species, shapes);
/// planner.set_dimensions(5.0, 3.0, 1.5, "rectangular")?;
/// planner.add_fish("goldfish", 5)?;
/// let volume = planner.volume_liters()?;
/// let pump = planner.pump_size()?;
/// ```
pub struct PondPlanner {
    species: Arc<dyn SpeciesCatalog>,
    shapes: Arc<dyn ShapeCatalog>,
    stock: StockManager,
    dimensions: DimensionsHolder,
    stocking: StockingCalculator,
    volume: VolumeCalculator,
}

impl PondPlanner {
    /// Creates a planner with default stock limits.
    pub fn new(species: Arc<dyn SpeciesCatalog>, shapes: Arc<dyn ShapeCatalog>) -> Self {
        Self::with_limits(species, shapes, StockLimits::default())
    }

    /// Creates a planner with custom stock limits.
    pub fn with_limits(
        species: Arc<dyn SpeciesCatalog>,
        shapes: Arc<dyn ShapeCatalog>,
        limits: StockLimits,
    ) -> Self {
        Self {
            stock: StockManager::with_limits(Arc::clone(&species), limits),
            dimensions: DimensionsHolder::new(Arc::clone(&shapes)),
            stocking: StockingCalculator::new(Arc::clone(&species)),
            volume: VolumeCalculator::new(Arc::clone(&shapes)),
            species,
            shapes,
        }
    }

    /// Sets the pond dimensions and shape, atomically.
    ///
    /// # Errors
    ///
    /// Returns a validation error (leaving any previous dimensions intact)
    /// if a dimension is out of range or the shape is unknown.
    pub fn set_dimensions(
        &mut self,
        length_m: f64,
        width_m: f64,
        avg_depth_m: f64,
        shape: &str,
    ) -> CoreResult<()> {
        self.dimensions
            .set(Dimensions::new(length_m, width_m, avg_depth_m, shape))
    }

    /// Returns the current dimensions, if set.
    #[must_use]
    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.get()
    }

    /// Adds fish to the stock. See [`StockManager::add`].
    pub fn add_fish(&mut self, species: &str, quantity: u32) -> CoreResult<()> {
        self.stock.add(species, quantity)
    }

    /// Removes fish from the stock. See [`StockManager::remove`].
    pub fn remove_fish(&mut self, species: &str, quantity: u32) -> CoreResult<()> {
        self.stock.remove(species, quantity)
    }

    /// Adds multiple species atomically. See [`StockManager::bulk_add`].
    pub fn add_fish_batch(&mut self, batch: &StockMap) -> CoreResult<()> {
        self.stock.bulk_add(batch)
    }

    /// Clears the entire stock.
    pub fn clear_stock(&mut self) {
        self.stock.clear();
    }

    /// Returns a defensive copy of the current stock.
    #[must_use]
    pub fn stock(&self) -> StockMap {
        self.stock.stock()
    }

    /// Returns the total number of stocked individuals.
    #[must_use]
    pub fn fish_count(&self) -> u64 {
        self.stock.count()
    }

    /// Checks whether a species is stocked (case-insensitive).
    #[must_use]
    pub fn has_fish(&self, species: &str) -> bool {
        self.stock.has(species)
    }

    /// Calculates the pond volume in liters.
    ///
    /// # Errors
    ///
    /// Fails if dimensions are not set, or propagates calculator errors.
    pub fn volume_liters(&self) -> CoreResult<f64> {
        let dimensions = self.require_dimensions()?;
        self.volume.volume_liters(dimensions)
    }

    /// Total volume required by the current stock.
    ///
    /// # Errors
    ///
    /// Propagates [`StockingCalculator::required_volume`] failures.
    pub fn required_volume(&self) -> CoreResult<f64> {
        self.stocking.required_volume(self.stock.current())
    }

    /// Total bioload of the current stock.
    ///
    /// # Errors
    ///
    /// Propagates [`StockingCalculator::bioload`] failures.
    pub fn bioload(&self) -> CoreResult<f64> {
        self.stocking.bioload(self.stock.current())
    }

    /// Required pump sizing for the current pond and stock.
    ///
    /// # Errors
    ///
    /// Fails if dimensions are not set, or propagates calculator errors.
    pub fn pump_size(&self) -> CoreResult<PumpRecommendation> {
        let volume = self.volume_liters()?;
        let bioload = self.bioload()?;
        equipment::pump_size(volume, bioload)
    }

    /// Required filtration sizing for the current pond and stock.
    ///
    /// # Errors
    ///
    /// Fails if dimensions are not set, or propagates calculator errors.
    pub fn filter_specs(&self) -> CoreResult<FilterRecommendation> {
        let volume = self.volume_liters()?;
        let bioload = self.bioload()?;
        equipment::filter_specs(volume, bioload)
    }

    /// Maximum stocking recommendations for the current pond volume.
    ///
    /// # Errors
    ///
    /// Fails if dimensions are not set, or propagates calculator errors.
    pub fn stocking_recommendations(&self) -> CoreResult<BTreeMap<String, u64>> {
        let volume = self.volume_liters()?;
        self.stocking.recommendations(volume)
    }

    /// Whether the current pond volume is adequate for the current stock.
    ///
    /// # Errors
    ///
    /// Fails if dimensions are not set, or propagates calculator errors.
    pub fn validate_stocking(&self) -> CoreResult<bool> {
        let volume = self.volume_liters()?;
        self.stocking.validate_stocking(self.stock.current(), volume)
    }

    /// All available shape keys, sorted.
    #[must_use]
    pub fn available_shapes(&self) -> Vec<String> {
        self.shapes.keys()
    }

    /// Shape keys belonging to a category; empty if the category is
    /// unknown.
    #[must_use]
    pub fn shapes_by_category(&self, category: &str) -> Vec<String> {
        self.shapes.by_category(category)
    }

    /// All species keys, sorted.
    #[must_use]
    pub fn species_keys(&self) -> Vec<String> {
        self.species.keys()
    }

    /// The species catalog backing this planner.
    #[must_use]
    pub fn species_catalog(&self) -> &Arc<dyn SpeciesCatalog> {
        &self.species
    }

    /// Replaces the planner state from a saved snapshot.
    ///
    /// Dimensions and stock pass through the same validated paths as
    /// direct mutation; the stock is applied as one atomic batch.
    ///
    /// # Errors
    ///
    /// Fails if the snapshot's dimensions or stock no longer validate
    /// against the current catalogs.
    pub fn restore(&mut self, dimensions: Dimensions, stock: &StockMap) -> CoreResult<()> {
        self.dimensions.set(dimensions)?;
        self.stock.clear();
        self.stock.bulk_add(stock)
    }

    fn require_dimensions(&self) -> CoreResult<&Dimensions> {
        self.dimensions
            .get()
            .ok_or_else(|| CoreError::validation("pond dimensions not set"))
    }
}

impl std::fmt::Debug for PondPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PondPlanner")
            .field("dimensions", &self.dimensions.get())
            .field("fish_count", &self.fish_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pondplan_catalog::{
        DimensionBounds, DimensionRules, FormulaKind, MemoryShapeCatalog, MemorySpeciesCatalog,
        ShapeFormula, Species,
    };

    fn planner() -> PondPlanner {
        let species = MemorySpeciesCatalog::from_entries([
            (
                "goldfish",
                Species {
                    name: "Goldfish".to_string(),
                    adult_length_cm: 20.0,
                    bioload_factor: 1.0,
                    min_liters_per_fish: 75.0,
                },
            ),
            (
                "koi",
                Species {
                    name: "Koi".to_string(),
                    adult_length_cm: 60.0,
                    bioload_factor: 2.5,
                    min_liters_per_fish: 950.0,
                },
            ),
        ])
        .unwrap();

        let shapes = MemoryShapeCatalog::new(
            [(
                "rectangular",
                ShapeFormula {
                    formula: FormulaKind::Simple,
                    multiplier: 1.0,
                    area_formula: "length * width".to_string(),
                },
            )],
            BTreeMap::new(),
            DimensionRules {
                min: DimensionBounds {
                    length: Some(1.0),
                    width: Some(1.0),
                    depth: Some(0.5),
                },
                max: DimensionBounds {
                    length: Some(50.0),
                    width: Some(50.0),
                    depth: Some(5.0),
                },
            },
        );

        PondPlanner::new(Arc::new(species), Arc::new(shapes))
    }

    #[test]
    fn new_planner_is_empty() {
        let planner = planner();
        assert!(planner.dimensions().is_none());
        assert_eq!(planner.fish_count(), 0);
    }

    #[test]
    fn volume_without_dimensions_fails() {
        let planner = planner();
        let result = planner.volume_liters();
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn rectangular_volume_end_to_end() {
        let mut planner = planner();
        planner.set_dimensions(5.0, 3.0, 1.5, "rectangular").unwrap();
        assert_eq!(planner.volume_liters().unwrap(), 22_500.0);
    }

    #[test]
    fn required_volume_and_bioload() {
        let mut planner = planner();
        planner.add_fish("goldfish", 5).unwrap();
        planner.add_fish("koi", 2).unwrap();

        assert_eq!(planner.required_volume().unwrap(), 2275.0);
        assert_eq!(planner.bioload().unwrap(), 10.0);
    }

    #[test]
    fn pump_size_uses_current_state() {
        let mut planner = planner();
        planner.set_dimensions(5.0, 2.0, 0.5, "rectangular").unwrap();
        planner.add_fish("goldfish", 5).unwrap();

        // 5,000 L, bioload 5.0 -> 2,500 * 1.5
        let pump = planner.pump_size().unwrap();
        assert_eq!(pump.flow_lph, 3750);
    }

    #[test]
    fn recommendations_without_dimensions_fail() {
        let planner = planner();
        assert!(planner.stocking_recommendations().is_err());
    }

    #[test]
    fn recommendations_use_display_names() {
        let mut planner = planner();
        planner.set_dimensions(5.0, 3.0, 1.5, "rectangular").unwrap();

        let recommendations = planner.stocking_recommendations().unwrap();
        assert_eq!(recommendations.get("Goldfish"), Some(&300));
        assert_eq!(recommendations.get("Koi"), Some(&23));
    }

    #[test]
    fn validate_stocking_reports_overstocking() {
        let mut planner = planner();
        planner.set_dimensions(2.0, 1.0, 0.5, "rectangular").unwrap(); // 1,000 L
        planner.add_fish("koi", 2).unwrap(); // needs 1,900 L

        assert!(!planner.validate_stocking().unwrap());
    }

    #[test]
    fn restore_applies_snapshot_atomically() {
        let mut planner = planner();
        let stock = StockMap::from([("goldfish".to_string(), 10), ("koi".to_string(), 1)]);
        planner
            .restore(Dimensions::new(6.0, 4.0, 1.0, "rectangular"), &stock)
            .unwrap();

        assert_eq!(planner.volume_liters().unwrap(), 24_000.0);
        assert_eq!(planner.fish_count(), 11);
    }

    #[test]
    fn restore_with_unknown_species_leaves_stock_empty() {
        let mut planner = planner();
        planner.add_fish("goldfish", 3).unwrap();

        let stock = StockMap::from([("shark".to_string(), 1)]);
        let result = planner.restore(Dimensions::new(6.0, 4.0, 1.0, "rectangular"), &stock);

        assert!(result.is_err());
        // The old stock was cleared; the invalid batch was never applied.
        assert_eq!(planner.fish_count(), 0);
    }

    #[test]
    fn shape_and_species_listings() {
        let planner = planner();
        assert_eq!(planner.available_shapes(), vec!["rectangular"]);
        assert_eq!(planner.species_keys(), vec!["goldfish", "koi"]);
    }
}
