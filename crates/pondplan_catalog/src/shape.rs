//! Pond shape formulas and dimension validation rules.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The surface-area formula family a shape uses.
///
/// Unknown kinds in catalog files deserialize to [`FormulaKind::Other`],
/// which falls back to the rectangular formula at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaKind {
    /// Rectangular: length × width.
    #[default]
    Simple,
    /// Circular: π × (width / 2)², width interpreted as diameter.
    Circular,
    /// Elliptical: π × (length / 2) × (width / 2).
    Elliptical,
    /// Triangular: 0.5 × length × width.
    Triangular,
    /// Regular polygon; the exact formula is picked from the description.
    Polygon,
    /// Irregular shape approximated from simpler formulas.
    Approximation,
    /// Unrecognized kind; treated as rectangular.
    #[serde(other)]
    Other,
}

/// Area formula configuration for one pond shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeFormula {
    /// Which formula family to dispatch on.
    #[serde(default)]
    pub formula: FormulaKind,
    /// Adjustment factor applied to the computed area.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Human-readable description of the area formula. Polygon and
    /// approximation shapes key off substrings of this text.
    #[serde(default)]
    pub area_formula: String,
}

fn default_multiplier() -> f64 {
    1.0
}

/// Optional per-dimension bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionBounds {
    /// Bound on pond length in meters.
    #[serde(default)]
    pub length: Option<f64>,
    /// Bound on pond width in meters.
    #[serde(default)]
    pub width: Option<f64>,
    /// Bound on average pond depth in meters.
    #[serde(default)]
    pub depth: Option<f64>,
}

/// Dimension validation rules supplied by the shape catalog.
///
/// Absent bounds are open: a missing minimum defaults to 0 and a missing
/// maximum to +infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionRules {
    /// Minimum allowed dimensions.
    #[serde(default)]
    pub min: DimensionBounds,
    /// Maximum allowed dimensions.
    #[serde(default)]
    pub max: DimensionBounds,
}

/// Read-only source of shape formulas and dimension rules.
///
/// Lookup is case-insensitive: keys are normalized to lowercase internally.
pub trait ShapeCatalog: Send + Sync {
    /// Returns the formula for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ShapeNotFound`] enumerating the valid keys
    /// if the shape is unknown.
    fn get(&self, key: &str) -> CatalogResult<&ShapeFormula>;

    /// Checks whether a shape exists.
    fn exists(&self, key: &str) -> bool;

    /// Returns all shape keys in sorted order.
    fn keys(&self) -> Vec<String>;

    /// Returns the shape keys belonging to `category`, or an empty list if
    /// the category is unknown.
    fn by_category(&self, category: &str) -> Vec<String>;

    /// Returns the dimension validation rules.
    fn validation_rules(&self) -> &DimensionRules;
}

/// An in-memory shape catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryShapeCatalog {
    shapes: BTreeMap<String, ShapeFormula>,
    categories: BTreeMap<String, Vec<String>>,
    rules: DimensionRules,
}

impl MemoryShapeCatalog {
    /// Builds a catalog from `(key, formula)` entries plus categories and
    /// validation rules. Keys and category names are normalized to
    /// lowercase.
    pub fn new<I, K>(
        entries: I,
        categories: BTreeMap<String, Vec<String>>,
        rules: DimensionRules,
    ) -> Self
    where
        I: IntoIterator<Item = (K, ShapeFormula)>,
        K: Into<String>,
    {
        let shapes = entries
            .into_iter()
            .map(|(key, formula)| (key.into().to_lowercase(), formula))
            .collect();
        let categories = categories
            .into_iter()
            .map(|(name, members)| (name.to_lowercase(), members))
            .collect();
        Self {
            shapes,
            categories,
            rules,
        }
    }

    /// Returns the number of shapes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the catalog holds no shapes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl ShapeCatalog for MemoryShapeCatalog {
    fn get(&self, key: &str) -> CatalogResult<&ShapeFormula> {
        let normalized = key.to_lowercase();
        self.shapes
            .get(&normalized)
            .ok_or_else(|| CatalogError::shape_not_found(key, &self.keys()))
    }

    fn exists(&self, key: &str) -> bool {
        self.shapes.contains_key(&key.to_lowercase())
    }

    fn keys(&self) -> Vec<String> {
        self.shapes.keys().cloned().collect()
    }

    fn by_category(&self, category: &str) -> Vec<String> {
        self.categories
            .get(&category.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn validation_rules(&self) -> &DimensionRules {
        &self.rules
    }
}
