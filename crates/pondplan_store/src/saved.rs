//! Saved pond configuration records.

use chrono::{DateTime, Utc};
use pondplan_core::{Dimensions, StockMap};
use serde::{Deserialize, Serialize};

/// A complete pond configuration snapshot that can be saved and restored.
///
/// The core hands the store a snapshot and receives one back; nothing in
/// the core depends on how it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPond {
    /// User-chosen configuration name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: String,
    /// When the configuration was created.
    pub created_at: DateTime<Utc>,
    /// The pond dimensions at save time.
    pub dimensions: Dimensions,
    /// The fish stock at save time.
    pub stock: StockMap,
}

impl SavedPond {
    /// Creates a snapshot stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        dimensions: Dimensions,
        stock: StockMap,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
            dimensions,
            stock,
        }
    }

    /// Total number of stocked individuals in the snapshot.
    #[must_use]
    pub fn fish_count(&self) -> u64 {
        self.stock.values().map(|&quantity| u64::from(quantity)).sum()
    }
}

/// Metadata about one saved configuration, as returned by listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PondSummary {
    /// Filename (or storage key) the configuration lives under.
    pub filename: String,
    /// Configuration name.
    pub name: String,
    /// Configuration description.
    pub description: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Pond shape.
    pub shape: String,
    /// Total stocked individuals.
    pub fish_count: u64,
}

impl PondSummary {
    /// Builds a summary from a saved configuration and its storage key.
    pub fn from_saved(filename: impl Into<String>, pond: &SavedPond) -> Self {
        Self {
            filename: filename.into(),
            name: pond.name.clone(),
            description: pond.description.clone(),
            created_at: pond.created_at,
            shape: pond.dimensions.shape.clone(),
            fish_count: pond.fish_count(),
        }
    }
}
