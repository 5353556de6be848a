//! Shape-dispatched pond volume calculation.

use crate::dimensions::{validate_dimensions, Dimensions};
use crate::error::{CoreError, CoreResult};
use pondplan_catalog::{FormulaKind, ShapeCatalog, ShapeFormula};
use std::f64::consts::PI;
use std::sync::Arc;

/// Conversion factor from cubic meters to liters.
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

/// Computes pond volume from dimensions using catalog shape formulas.
pub struct VolumeCalculator {
    shapes: Arc<dyn ShapeCatalog>,
}

impl VolumeCalculator {
    /// Creates a calculator backed by the given shape catalog.
    pub fn new(shapes: Arc<dyn ShapeCatalog>) -> Self {
        Self { shapes }
    }

    /// Calculates the pond volume in liters.
    ///
    /// Dimensions are validated against the catalog first (shape existence
    /// and min/max bounds); the surface area is then dispatched on the
    /// shape's formula kind, multiplied by the shape's adjustment factor
    /// and the average depth, and converted to liters.
    ///
    /// # Errors
    ///
    /// Returns a validation error for out-of-range dimensions, a
    /// shape-not-found error enumerating the valid shapes, or a
    /// computation error if the result is not strictly positive (a
    /// misconfigured negative multiplier).
    pub fn volume_liters(&self, dimensions: &Dimensions) -> CoreResult<f64> {
        validate_dimensions(dimensions, self.shapes.as_ref())?;

        let formula = self.shapes.get(&dimensions.shape)?;
        let area = surface_area(formula, dimensions.length_m, dimensions.width_m);
        let volume_m3 = area * formula.multiplier * dimensions.avg_depth_m;

        if volume_m3 <= 0.0 {
            return Err(CoreError::computation("calculated volume must be positive"));
        }

        Ok(volume_m3 * LITERS_PER_CUBIC_METER)
    }
}

impl std::fmt::Debug for VolumeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeCalculator").finish_non_exhaustive()
    }
}

/// Surface area in square meters for one shape formula.
///
/// Polygon and approximation formulas pick their variant from substrings
/// of the catalog's area description; anything unrecognized falls back to
/// the rectangular formula.
fn surface_area(formula: &ShapeFormula, length: f64, width: f64) -> f64 {
    match formula.formula {
        FormulaKind::Simple => length * width,
        // Width is the diameter; length is unused.
        FormulaKind::Circular => PI * (width / 2.0).powi(2),
        FormulaKind::Elliptical => PI * (length / 2.0) * (width / 2.0),
        FormulaKind::Triangular => 0.5 * length * width,
        FormulaKind::Polygon => {
            if formula.area_formula.contains("hexagonal") {
                (3.0 * 3.0_f64.sqrt() / 2.0) * width * width
            } else if formula.area_formula.contains("octagonal") {
                2.0 * (1.0 + 2.0_f64.sqrt()) * width * width
            } else {
                length * width
            }
        }
        FormulaKind::Approximation => {
            if formula.area_formula.contains("pi") {
                PI * (length / 2.0) * (width / 2.0)
            } else {
                length * width
            }
        }
        FormulaKind::Other => length * width,
    }
}
