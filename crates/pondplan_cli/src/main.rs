//! pondplan CLI
//!
//! Command-line pond planning tools.
//!
//! # Commands
//!
//! - `volume` - Compute the volume for a set of dimensions
//! - `create` - Validate and save a pond configuration
//! - `report` - Print the full planning report for a saved pond
//! - `ponds` - List saved pond configurations
//! - `delete` - Delete a saved pond configuration
//! - `shapes` - List available pond shapes
//! - `species` - List available fish species

mod commands;
mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pond capacity planning from the command line.
#[derive(Parser)]
#[command(name = "pondplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the species catalog file
    #[arg(global = true, long, default_value = "data/species.json")]
    species_file: PathBuf,

    /// Path to the shape catalog file
    #[arg(global = true, long, default_value = "data/shapes.json")]
    shapes_file: PathBuf,

    /// Directory holding saved pond configurations
    #[arg(global = true, long, default_value = "data/saved_ponds")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the volume for a set of dimensions
    Volume {
        /// Pond length in meters
        #[arg(long)]
        length: f64,

        /// Pond width in meters
        #[arg(long)]
        width: f64,

        /// Average pond depth in meters
        #[arg(long)]
        depth: f64,

        /// Pond shape
        #[arg(long, default_value = "rectangular")]
        shape: String,
    },

    /// Validate and save a pond configuration
    Create {
        /// Name for the saved configuration
        name: String,

        /// Pond length in meters
        #[arg(long)]
        length: f64,

        /// Pond width in meters
        #[arg(long)]
        width: f64,

        /// Average pond depth in meters
        #[arg(long)]
        depth: f64,

        /// Pond shape
        #[arg(long, default_value = "rectangular")]
        shape: String,

        /// Fish to stock, as SPECIES=QTY (repeatable)
        #[arg(long = "fish", value_name = "SPECIES=QTY")]
        fish: Vec<String>,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Print the full planning report for a saved pond
    Report {
        /// Name of the saved configuration
        name: String,
    },

    /// List saved pond configurations
    Ponds,

    /// Delete a saved pond configuration
    Delete {
        /// Name of the saved configuration
        name: String,
    },

    /// List available pond shapes
    Shapes {
        /// Only show shapes in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List available fish species
    Species,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Volume {
            length,
            width,
            depth,
            shape,
        } => {
            commands::volume::run(
                &cli.species_file,
                &cli.shapes_file,
                length,
                width,
                depth,
                &shape,
            )?;
        }
        Commands::Create {
            name,
            length,
            width,
            depth,
            shape,
            fish,
            description,
        } => {
            commands::create::run(
                &cli.species_file,
                &cli.shapes_file,
                &cli.data_dir,
                &name,
                length,
                width,
                depth,
                &shape,
                &fish,
                &description,
            )?;
        }
        Commands::Report { name } => {
            commands::report::run(&cli.species_file, &cli.shapes_file, &cli.data_dir, &name)?;
        }
        Commands::Ponds => {
            commands::ponds::list(&cli.data_dir)?;
        }
        Commands::Delete { name } => {
            commands::ponds::delete(&cli.data_dir, &name)?;
        }
        Commands::Shapes { category } => {
            commands::catalogs::shapes(&cli.shapes_file, category.as_deref())?;
        }
        Commands::Species => {
            commands::catalogs::species(&cli.species_file)?;
        }
    }

    Ok(())
}
