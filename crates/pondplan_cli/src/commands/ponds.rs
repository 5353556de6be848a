//! The `ponds` and `delete` commands.

use pondplan_store::{JsonFileStore, PondStore};
use std::error::Error;
use std::path::Path;

/// Lists saved pond configurations, newest first.
pub fn list(data_dir: &Path) -> Result<(), Box<dyn Error>> {
    let store = JsonFileStore::open(data_dir)?;
    let summaries = store.list()?;

    if summaries.is_empty() {
        println!("No saved ponds");
        return Ok(());
    }

    for summary in summaries {
        let description = if summary.description.is_empty() {
            String::new()
        } else {
            format!(" - {}", summary.description)
        };
        println!(
            "{}  [{}] {} fish, created {}{}",
            summary.name,
            summary.shape,
            summary.fish_count,
            summary.created_at.format("%Y-%m-%d %H:%M"),
            description
        );
    }
    Ok(())
}

/// Deletes a saved pond configuration.
pub fn delete(data_dir: &Path, name: &str) -> Result<(), Box<dyn Error>> {
    let store = JsonFileStore::open(data_dir)?;
    if store.delete(name)? {
        println!("Deleted '{name}'");
    } else {
        println!("No saved pond named '{name}'");
    }
    Ok(())
}
