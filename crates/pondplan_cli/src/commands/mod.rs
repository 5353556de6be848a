//! CLI subcommand implementations.

pub mod catalogs;
pub mod create;
pub mod ponds;
pub mod report;
pub mod volume;

use pondplan_catalog::{load_shape_catalog, load_species_catalog};
use pondplan_core::PondPlanner;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

/// Builds a planner from the catalog files given on the command line.
pub(crate) fn open_planner(
    species_file: &Path,
    shapes_file: &Path,
) -> Result<PondPlanner, Box<dyn Error>> {
    let species = load_species_catalog(species_file)?;
    let shapes = load_shape_catalog(shapes_file)?;
    Ok(PondPlanner::new(Arc::new(species), Arc::new(shapes)))
}

/// Parses a `SPECIES=QTY` argument.
pub(crate) fn parse_fish_arg(arg: &str) -> Result<(String, u32), Box<dyn Error>> {
    let (species, quantity) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected SPECIES=QTY, got '{arg}'"))?;
    let quantity: u32 = quantity
        .parse()
        .map_err(|_| format!("invalid quantity in '{arg}'"))?;
    Ok((species.to_string(), quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fish_arg_accepts_pairs() {
        let (species, quantity) = parse_fish_arg("goldfish=5").unwrap();
        assert_eq!(species, "goldfish");
        assert_eq!(quantity, 5);
    }

    #[test]
    fn parse_fish_arg_rejects_missing_separator() {
        assert!(parse_fish_arg("goldfish").is_err());
    }

    #[test]
    fn parse_fish_arg_rejects_bad_quantity() {
        assert!(parse_fish_arg("goldfish=lots").is_err());
        assert!(parse_fish_arg("goldfish=-2").is_err());
    }
}
