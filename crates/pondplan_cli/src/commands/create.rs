//! The `create` command.

use super::{open_planner, parse_fish_arg};
use pondplan_core::StockMap;
use pondplan_store::{JsonFileStore, PondStore, SavedPond};
use std::error::Error;
use std::path::Path;
use tracing::info;

/// Validates a pond through the planner and saves it.
#[allow(clippy::too_many_arguments)]
pub fn run(
    species_file: &Path,
    shapes_file: &Path,
    data_dir: &Path,
    name: &str,
    length: f64,
    width: f64,
    depth: f64,
    shape: &str,
    fish: &[String],
    description: &str,
) -> Result<(), Box<dyn Error>> {
    let mut planner = open_planner(species_file, shapes_file)?;
    planner.set_dimensions(length, width, depth, shape)?;

    let mut batch = StockMap::new();
    for arg in fish {
        let (species, quantity) = parse_fish_arg(arg)?;
        let entry = batch.entry(species.to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }
    if !batch.is_empty() {
        planner.add_fish_batch(&batch)?;
    }

    let dimensions = planner
        .dimensions()
        .cloned()
        .ok_or("pond dimensions not set")?;
    let snapshot = SavedPond::new(name, description, dimensions, planner.stock());

    let store = JsonFileStore::open(data_dir)?;
    let filename = store.save(&snapshot)?;
    info!(%filename, "pond configuration saved");

    println!("Saved '{name}' as {filename}");
    println!("Volume: {:.0} liters", planner.volume_liters()?);
    if !planner.validate_stocking()? {
        println!("Warning: pond may be overstocked");
    }
    Ok(())
}
