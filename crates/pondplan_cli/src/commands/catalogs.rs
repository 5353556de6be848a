//! The `shapes` and `species` commands.

use pondplan_catalog::{
    load_shape_catalog, load_species_catalog, ShapeCatalog, SpeciesCatalog,
};
use std::error::Error;
use std::path::Path;

/// Lists available pond shapes, optionally filtered by category.
pub fn shapes(shapes_file: &Path, category: Option<&str>) -> Result<(), Box<dyn Error>> {
    let catalog = load_shape_catalog(shapes_file)?;

    let keys = match category {
        Some(category) => {
            let keys = catalog.by_category(category);
            if keys.is_empty() {
                println!("No shapes in category '{category}'");
                return Ok(());
            }
            keys
        }
        None => catalog.keys(),
    };

    for key in keys {
        println!("{key}");
    }
    Ok(())
}

/// Lists available species with their planning characteristics.
pub fn species(species_file: &Path) -> Result<(), Box<dyn Error>> {
    let catalog = load_species_catalog(species_file)?;

    for (key, species) in catalog.all() {
        println!(
            "{key}  {} ({:.0} cm, {:.0} L/fish, bioload {:.1})",
            species.name,
            species.adult_length_cm,
            species.min_liters_per_fish,
            species.bioload_factor
        );
    }
    Ok(())
}
