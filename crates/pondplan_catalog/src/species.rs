//! Fish species reference data.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fish species with the characteristics needed for capacity planning.
///
/// Species records are immutable after catalog load. `bioload_factor` is a
/// relative waste-production weight (1.0 = baseline) and
/// `min_liters_per_fish` the volume one adult individual requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Display name shown to users.
    pub name: String,
    /// Expected adult length in centimeters.
    pub adult_length_cm: f64,
    /// Relative waste production per individual.
    pub bioload_factor: f64,
    /// Minimum water volume per individual, in liters.
    pub min_liters_per_fish: f64,
}

impl Species {
    /// Validates that all numeric fields are strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidEntry`] naming `key` if any field is
    /// zero or negative.
    pub fn validate(&self, key: &str) -> CatalogResult<()> {
        if self.adult_length_cm <= 0.0 {
            return Err(CatalogError::invalid_entry(
                key,
                "adult_length_cm must be positive",
            ));
        }
        if self.bioload_factor <= 0.0 {
            return Err(CatalogError::invalid_entry(
                key,
                "bioload_factor must be positive",
            ));
        }
        if self.min_liters_per_fish <= 0.0 {
            return Err(CatalogError::invalid_entry(
                key,
                "min_liters_per_fish must be positive",
            ));
        }
        Ok(())
    }
}

/// Read-only source of species reference data.
///
/// Lookup is case-insensitive: keys are normalized to lowercase internally.
pub trait SpeciesCatalog: Send + Sync {
    /// Returns the species for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SpeciesNotFound`] if the key is unknown.
    fn get(&self, key: &str) -> CatalogResult<&Species>;

    /// Checks whether a species exists.
    fn exists(&self, key: &str) -> bool;

    /// Returns all species, keyed by their normalized identifier.
    fn all(&self) -> &BTreeMap<String, Species>;

    /// Returns all species keys in sorted order.
    fn keys(&self) -> Vec<String>;
}

/// An in-memory species catalog.
///
/// Built directly from entries; entries are validated and keys normalized
/// to lowercase on construction. Suitable for embedding and for tests; file
/// loading lives in [`crate::file`].
#[derive(Debug, Clone, Default)]
pub struct MemorySpeciesCatalog {
    species: BTreeMap<String, Species>,
}

impl MemorySpeciesCatalog {
    /// Builds a catalog from `(key, species)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidEntry`] if any entry has a
    /// non-positive numeric field.
    pub fn from_entries<I, K>(entries: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, Species)>,
        K: Into<String>,
    {
        let mut species = BTreeMap::new();
        for (key, entry) in entries {
            let key = key.into().to_lowercase();
            entry.validate(&key)?;
            species.insert(key, entry);
        }
        Ok(Self { species })
    }

    /// Returns the number of species in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Returns true if the catalog holds no species.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesCatalog for MemorySpeciesCatalog {
    fn get(&self, key: &str) -> CatalogResult<&Species> {
        let normalized = key.to_lowercase();
        self.species
            .get(&normalized)
            .ok_or_else(|| CatalogError::species_not_found(key))
    }

    fn exists(&self, key: &str) -> bool {
        self.species.contains_key(&key.to_lowercase())
    }

    fn all(&self) -> &BTreeMap<String, Species> {
        &self.species
    }

    fn keys(&self) -> Vec<String> {
        self.species.keys().cloned().collect()
    }
}
