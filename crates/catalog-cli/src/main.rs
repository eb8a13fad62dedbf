//! Method catalog CLI
//!
//! Compiles the markdown method catalog into a JSON index and keeps managed
//! sections in host files up to date.

mod cli;
mod commands;
mod config;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Context;
use error::Result;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!(config = %cli.config.display(), dry_run = cli.dry_run, "starting");

    let ctx = Context::load(&cli.config, cli.dry_run)?;

    match cli.command {
        Commands::Index => commands::run_index(&ctx).map(|_| ()),
        Commands::Install => commands::run_install(&ctx),
        Commands::Update => commands::run_update(&ctx),
        Commands::Remove => commands::run_remove(&ctx),
        Commands::Validate => commands::run_validate(&ctx),
    }
}
