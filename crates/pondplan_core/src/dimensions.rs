//! Pond dimensions and their validated holder.

use crate::error::{CoreError, CoreResult};
use crate::transaction::TransactionEngine;
use pondplan_catalog::ShapeCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Rollback key used for the dimensions value.
const DIMENSIONS_KEY: &str = "dimensions";

/// Physical dimensions and shape of a pond.
///
/// A value object: updates replace it wholesale, never field-by-field.
/// For non-rectangular shapes length and width may stand for other
/// measurements (e.g. width is the diameter for circular ponds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in meters (longest dimension).
    pub length_m: f64,
    /// Width in meters (shortest dimension).
    pub width_m: f64,
    /// Average depth in meters.
    pub avg_depth_m: f64,
    /// Shape identifier, resolved against the shape catalog.
    pub shape: String,
}

impl Dimensions {
    /// Creates a new dimensions value.
    pub fn new(length_m: f64, width_m: f64, avg_depth_m: f64, shape: impl Into<String>) -> Self {
        Self {
            length_m,
            width_m,
            avg_depth_m,
            shape: shape.into(),
        }
    }
}

/// Validates dimensions against the shape catalog.
///
/// Checks that the shape id is non-empty and exists (the error enumerates
/// the valid ids), then checks each dimension against the catalog's bounds.
/// An absent minimum defaults to 0 and an absent maximum to +infinity.
///
/// # Errors
///
/// Returns a validation or shape-not-found error describing the first
/// violated rule.
pub fn validate_dimensions(
    dimensions: &Dimensions,
    shapes: &dyn ShapeCatalog,
) -> CoreResult<()> {
    if dimensions.shape.is_empty() {
        return Err(CoreError::validation("pond shape must be specified"));
    }
    // Resolving the shape first gives the enumerated not-found error.
    shapes.get(&dimensions.shape)?;

    let rules = shapes.validation_rules();

    let min_length = rules.min.length.unwrap_or(0.0);
    if dimensions.length_m < min_length {
        return Err(CoreError::validation(format!(
            "length must be at least {min_length} meters"
        )));
    }
    let min_width = rules.min.width.unwrap_or(0.0);
    if dimensions.width_m < min_width {
        return Err(CoreError::validation(format!(
            "width must be at least {min_width} meters"
        )));
    }
    let min_depth = rules.min.depth.unwrap_or(0.0);
    if dimensions.avg_depth_m < min_depth {
        return Err(CoreError::validation(format!(
            "depth must be at least {min_depth} meters"
        )));
    }

    if let Some(max_length) = rules.max.length {
        if dimensions.length_m > max_length {
            return Err(CoreError::validation(format!(
                "length cannot exceed {max_length} meters"
            )));
        }
    }
    if let Some(max_width) = rules.max.width {
        if dimensions.width_m > max_width {
            return Err(CoreError::validation(format!(
                "width cannot exceed {max_width} meters"
            )));
        }
    }
    if let Some(max_depth) = rules.max.depth {
        if dimensions.avg_depth_m > max_depth {
            return Err(CoreError::validation(format!(
                "depth cannot exceed {max_depth} meters"
            )));
        }
    }

    Ok(())
}

/// Validated single-value store for pond dimensions.
///
/// Writes go through the holder's [`TransactionEngine`]; validation runs
/// before the value is replaced, so a rejected update leaves the previous
/// dimensions intact.
pub struct DimensionsHolder {
    current: Option<Dimensions>,
    engine: TransactionEngine<Option<Dimensions>>,
    shapes: Arc<dyn ShapeCatalog>,
}

impl DimensionsHolder {
    /// Creates an empty holder backed by the given shape catalog.
    pub fn new(shapes: Arc<dyn ShapeCatalog>) -> Self {
        Self {
            current: None,
            engine: TransactionEngine::new(),
            shapes,
        }
    }

    /// Replaces the dimensions wholesale after validation.
    ///
    /// # Errors
    ///
    /// Returns a validation error (or a shape-not-found error enumerating
    /// the valid shapes) without touching the stored value.
    pub fn set(&mut self, dimensions: Dimensions) -> CoreResult<()> {
        let Self {
            current,
            engine,
            shapes,
        } = self;
        engine.execute(|tx| {
            validate_dimensions(&dimensions, shapes.as_ref())?;
            tx.save_state(DIMENSIONS_KEY, current);
            debug!(shape = %dimensions.shape, "dimensions updated");
            *current = Some(dimensions);
            Ok(())
        })
    }

    /// Returns the current dimensions, if set.
    #[must_use]
    pub fn get(&self) -> Option<&Dimensions> {
        self.current.as_ref()
    }

    /// Clears the stored dimensions. Immediate, non-transactional.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

impl std::fmt::Debug for DimensionsHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DimensionsHolder")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pondplan_catalog::{
        DimensionBounds, DimensionRules, FormulaKind, MemoryShapeCatalog, ShapeFormula,
    };
    use std::collections::BTreeMap;

    fn shapes() -> Arc<dyn ShapeCatalog> {
        let rules = DimensionRules {
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
        };
        Arc::new(MemoryShapeCatalog::new(
            [(
                "rectangular",
                ShapeFormula {
                    formula: FormulaKind::Simple,
                    multiplier: 1.0,
                    area_formula: "length * width".to_string(),
                },
            )],
            BTreeMap::new(),
            rules,
        ))
    }

    #[test]
    fn set_valid_dimensions() {
        let mut holder = DimensionsHolder::new(shapes());
        holder
            .set(Dimensions::new(5.0, 3.0, 1.5, "rectangular"))
            .unwrap();

        let dims = holder.get().unwrap();
        assert_eq!(dims.length_m, 5.0);
        assert_eq!(dims.shape, "rectangular");
    }

    #[test]
    fn unknown_shape_rejected_and_value_kept() {
        let mut holder = DimensionsHolder::new(shapes());
        holder
            .set(Dimensions::new(5.0, 3.0, 1.5, "rectangular"))
            .unwrap();

        let result = holder.set(Dimensions::new(5.0, 3.0, 1.5, "star"));
        assert!(result.is_err());
        assert_eq!(holder.get().unwrap().shape, "rectangular");
    }

    #[test]
    fn unknown_shape_error_lists_valid_shapes() {
        let mut holder = DimensionsHolder::new(shapes());
        let err = holder
            .set(Dimensions::new(5.0, 3.0, 1.5, "star"))
            .unwrap_err();
        assert!(err.to_string().contains("rectangular"));
    }

    #[test]
    fn below_minimum_rejected() {
        let mut holder = DimensionsHolder::new(shapes());
        let result = holder.set(Dimensions::new(0.5, 3.0, 1.5, "rectangular"));
        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert!(holder.get().is_none());
    }

    #[test]
    fn above_maximum_rejected() {
        let mut holder = DimensionsHolder::new(shapes());
        let result = holder.set(Dimensions::new(5.0, 3.0, 9.0, "rectangular"));
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn empty_shape_rejected() {
        let mut holder = DimensionsHolder::new(shapes());
        let result = holder.set(Dimensions::new(5.0, 3.0, 1.5, ""));
        assert!(matches!(result, Err(CoreError::Validation { .. })));
    }

    #[test]
    fn update_replaces_wholesale() {
        let mut holder = DimensionsHolder::new(shapes());
        holder
            .set(Dimensions::new(5.0, 3.0, 1.5, "rectangular"))
            .unwrap();
        holder
            .set(Dimensions::new(10.0, 4.0, 2.0, "rectangular"))
            .unwrap();

        let dims = holder.get().unwrap();
        assert_eq!(dims.length_m, 10.0);
        assert_eq!(dims.width_m, 4.0);
    }

    #[test]
    fn clear_removes_value() {
        let mut holder = DimensionsHolder::new(shapes());
        holder
            .set(Dimensions::new(5.0, 3.0, 1.5, "rectangular"))
            .unwrap();
        holder.clear();
        assert!(holder.get().is_none());
    }

    #[test]
    fn absent_bounds_are_open() {
        let open = Arc::new(MemoryShapeCatalog::new(
            [(
                "rectangular",
                ShapeFormula {
                    formula: FormulaKind::Simple,
                    multiplier: 1.0,
                    area_formula: String::new(),
                },
            )],
            BTreeMap::new(),
            DimensionRules::default(),
        ));
        let mut holder = DimensionsHolder::new(open);
        holder
            .set(Dimensions::new(500.0, 500.0, 80.0, "rectangular"))
            .unwrap();
        assert!(holder.get().is_some());
    }
}
