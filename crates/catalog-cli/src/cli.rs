//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Method catalog - compile the API method catalog and manage its sections
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the catalog config file (TOML, JSON or YAML)
    #[arg(short, long, global = true, default_value = "catalog.toml", env = "CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Show what would change without writing any file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compile the markdown catalog into the JSON index
    Index,

    /// Compile the index and install the section into every target
    ///
    /// Missing target files are created; files without the section get it
    /// appended; existing sections are replaced in place.
    Install,

    /// Compile the index and refresh sections in targets that already exist
    Update,

    /// Remove the section from every target
    Remove,

    /// Check that the index and every target section are in place
    Validate,
}
