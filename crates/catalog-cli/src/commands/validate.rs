//! Validate command

use std::path::Path;

use catalog_blocks::{extract_section, inspect};
use catalog_fs::io;
use colored::Colorize;

use super::Context;
use super::sections::load_section;
use crate::config::TargetConfig;
use crate::error::{CliError, Result};

/// Re-read the index and every target and report what is missing or stale.
pub fn run_validate(ctx: &Context) -> Result<()> {
    println!("{} Validating installation...", "=>".blue().bold());
    let mut failures = 0;

    let output = ctx.resolve(&ctx.config.index.output);
    if output.is_file() {
        println!("   {} index {}", "OK".green().bold(), output.display());
    } else {
        println!("   {} index {} missing", "MISSING".red().bold(), output.display());
        failures += 1;
    }

    for target in &ctx.config.targets {
        let path = ctx.resolve(&target.path);
        let status = inspect(&path, &target.marker_pair())?;
        let shown = path.display().to_string();

        if status.is_installed() {
            match stale_section(ctx, target, &path)? {
                None => println!("   {} {}", "OK".green().bold(), shown.cyan()),
                Some(problem) => {
                    failures += 1;
                    println!("   {} {} {}", "STALE".yellow().bold(), shown.cyan(), problem);
                }
            }
            continue;
        }

        let problem = if !status.file_exists {
            "file missing"
        } else if !status.has_start {
            "section not installed"
        } else if !status.has_end {
            "end marker missing"
        } else {
            "end marker before start marker"
        };
        failures += 1;
        println!("   {} {} {}", "MISSING".red().bold(), shown.cyan(), problem);
    }

    if failures > 0 {
        return Err(CliError::Validation { failures });
    }
    println!("{} All sections in place.", "OK".green().bold());
    Ok(())
}

/// Compare an installed section with what the template would install now.
fn stale_section(ctx: &Context, target: &TargetConfig, path: &Path) -> Result<Option<&'static str>> {
    let markers = target.marker_pair();
    let expected = match load_section(ctx, target, &markers) {
        Ok(section) => section,
        Err(CliError::TemplateNotFound { .. }) => return Ok(Some("template missing")),
        Err(e) => return Err(e),
    };

    let content = io::read_text(path)?;
    let installed = extract_section(&content, &markers);
    if installed.is_some() && installed == extract_section(&expected, &markers) {
        Ok(None)
    } else {
        Ok(Some("section out of date"))
    }
}
