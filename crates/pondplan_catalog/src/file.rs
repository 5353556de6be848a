//! JSON flat-file catalog loading.
//!
//! Catalog files are loaded once at startup and turned into the in-memory
//! catalogs; nothing re-reads them afterwards.

use crate::error::CatalogResult;
use crate::shape::{DimensionRules, MemoryShapeCatalog, ShapeFormula};
use crate::species::{MemorySpeciesCatalog, Species};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// On-disk layout of a species catalog file.
#[derive(Debug, Deserialize)]
struct SpeciesDocument {
    species: BTreeMap<String, Species>,
}

/// On-disk layout of a shape catalog file.
#[derive(Debug, Deserialize)]
struct ShapeDocument {
    shapes: BTreeMap<String, ShapeFormula>,
    #[serde(default)]
    categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    validation_rules: DimensionRules,
}

/// Loads a species catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any entry
/// carries a non-positive numeric field.
pub fn load_species_catalog(path: &Path) -> CatalogResult<MemorySpeciesCatalog> {
    let contents = fs::read_to_string(path)?;
    let document: SpeciesDocument = serde_json::from_str(&contents)?;
    MemorySpeciesCatalog::from_entries(document.species)
}

/// Loads a shape catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_shape_catalog(path: &Path) -> CatalogResult<MemoryShapeCatalog> {
    let contents = fs::read_to_string(path)?;
    let document: ShapeDocument = serde_json::from_str(&contents)?;
    Ok(MemoryShapeCatalog::new(
        document.shapes,
        document.categories,
        document.validation_rules,
    ))
}
