//! # pondplan catalog
//!
//! Read-only reference data for pond planning:
//!
//! - [`Species`] records with bioload and space requirements
//! - [`ShapeFormula`] records describing surface-area formulas
//! - [`SpeciesCatalog`] / [`ShapeCatalog`] traits for injection
//! - In-memory implementations and JSON flat-file loaders
//!
//! Catalogs are loaded once at startup and shared read-only; they are never
//! mutated afterwards.

mod error;
mod file;
mod shape;
mod species;

pub use error::{CatalogError, CatalogResult};
pub use file::{load_shape_catalog, load_species_catalog};
pub use shape::{
    DimensionBounds, DimensionRules, FormulaKind, MemoryShapeCatalog, ShapeCatalog, ShapeFormula,
};
pub use species::{MemorySpeciesCatalog, Species, SpeciesCatalog};
