//! The `volume` command.

use super::open_planner;
use std::error::Error;
use std::path::Path;

/// Computes and prints the volume for the given dimensions.
pub fn run(
    species_file: &Path,
    shapes_file: &Path,
    length: f64,
    width: f64,
    depth: f64,
    shape: &str,
) -> Result<(), Box<dyn Error>> {
    let mut planner = open_planner(species_file, shapes_file)?;
    planner.set_dimensions(length, width, depth, shape)?;

    let volume = planner.volume_liters()?;
    println!("{volume:.0} liters");
    Ok(())
}
