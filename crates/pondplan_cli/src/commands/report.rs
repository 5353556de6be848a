//! The `report` command.

use super::open_planner;
use crate::report;
use pondplan_store::{JsonFileStore, PondStore};
use std::error::Error;
use std::path::Path;

/// Loads a saved pond and prints the full planning report.
pub fn run(
    species_file: &Path,
    shapes_file: &Path,
    data_dir: &Path,
    name: &str,
) -> Result<(), Box<dyn Error>> {
    let store = JsonFileStore::open(data_dir)?;
    let saved = store.load(name)?;

    let mut planner = open_planner(species_file, shapes_file)?;
    planner.restore(saved.dimensions, &saved.stock)?;

    print!("{}", report::render(&planner)?);
    Ok(())
}
