//! Catalog fixtures and planner helpers.
//!
//! Provides the reference catalogs shared by tests across the workspace.
//! The species values match the figures the calculators are documented
//! against (goldfish at 75 L / 1.0, koi at 950 L / 2.5).

use pondplan_catalog::{
    DimensionBounds, DimensionRules, FormulaKind, MemoryShapeCatalog, MemorySpeciesCatalog,
    ShapeCatalog, ShapeFormula, Species, SpeciesCatalog,
};
use pondplan_core::PondPlanner;
use std::collections::BTreeMap;
use std::sync::Arc;

fn species(name: &str, length: f64, bioload: f64, min_liters: f64) -> Species {
    Species {
        name: name.to_string(),
        adult_length_cm: length,
        bioload_factor: bioload,
        min_liters_per_fish: min_liters,
    }
}

fn shape(kind: FormulaKind, multiplier: f64, description: &str) -> ShapeFormula {
    ShapeFormula {
        formula: kind,
        multiplier,
        area_formula: description.to_string(),
    }
}

/// A species catalog with the common pond fish.
#[must_use]
pub fn sample_species_catalog() -> Arc<dyn SpeciesCatalog> {
    let catalog = MemorySpeciesCatalog::from_entries([
        ("goldfish", species("Goldfish", 20.0, 1.0, 75.0)),
        ("koi", species("Koi", 60.0, 2.5, 950.0)),
        ("shubunkin", species("Shubunkin", 30.0, 1.2, 100.0)),
        ("orfe", species("Golden Orfe", 50.0, 1.8, 400.0)),
        ("tench", species("Tench", 40.0, 1.5, 200.0)),
    ])
    .expect("fixture species are valid");
    Arc::new(catalog)
}

/// A shape catalog covering every formula family.
#[must_use]
pub fn sample_shape_catalog() -> Arc<dyn ShapeCatalog> {
    let mut categories = BTreeMap::new();
    categories.insert(
        "geometric".to_string(),
        vec![
            "rectangular".to_string(),
            "circular".to_string(),
            "oval".to_string(),
            "triangular".to_string(),
            "hexagonal".to_string(),
            "octagonal".to_string(),
        ],
    );
    categories.insert(
        "organic".to_string(),
        vec!["kidney".to_string(), "irregular".to_string()],
    );
    categories.insert("complex".to_string(), vec!["l_shaped".to_string()]);

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

    let catalog = MemoryShapeCatalog::new(
        [
            ("rectangular", shape(FormulaKind::Simple, 1.0, "length * width")),
            ("circular", shape(FormulaKind::Circular, 1.0, "pi * (diameter/2)^2")),
            ("oval", shape(FormulaKind::Elliptical, 1.0, "pi * (length/2) * (width/2)")),
            ("triangular", shape(FormulaKind::Triangular, 1.0, "0.5 * base * height")),
            (
                "hexagonal",
                shape(FormulaKind::Polygon, 1.0, "hexagonal: (3*sqrt(3)/2) * width^2"),
            ),
            (
                "octagonal",
                shape(FormulaKind::Polygon, 1.0, "octagonal: 2*(1+sqrt(2)) * width^2"),
            ),
            (
                "kidney",
                shape(FormulaKind::Approximation, 0.8, "pi-based elliptical approximation"),
            ),
            (
                "l_shaped",
                shape(FormulaKind::Approximation, 0.85, "combined rectangular sections"),
            ),
            (
                "irregular",
                shape(FormulaKind::Approximation, 0.75, "estimated from bounding rectangle"),
            ),
        ],
        categories,
        rules,
    );
    Arc::new(catalog)
}

/// A planner wired to the sample catalogs.
#[must_use]
pub fn test_planner() -> PondPlanner {
    PondPlanner::new(sample_species_catalog(), sample_shape_catalog())
}
