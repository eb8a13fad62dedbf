//! Remove command

use catalog_blocks::{RemoveOutcome, plan_remove, remove};
use catalog_fs::io;
use colored::Colorize;

use super::Context;
use crate::error::Result;

/// Remove the section from every target.
///
/// A target whose start marker has no matching end marker is left as is
/// and reported; nothing is stripped on a best-effort basis.
pub fn run_remove(ctx: &Context) -> Result<()> {
    println!("{} Removing sections...", "=>".blue().bold());

    for target in &ctx.config.targets {
        let path = ctx.resolve(&target.path);
        let markers = target.marker_pair();

        let outcome = if ctx.dry_run {
            let existing = io::read_text_if_exists(&path)?;
            plan_remove(existing.as_deref(), &markers).1
        } else {
            remove(&path, &markers)?
        };

        let label = match outcome {
            RemoveOutcome::Removed => "OK".green().bold(),
            RemoveOutcome::FileAbsent | RemoveOutcome::SectionAbsent => "SKIP".dimmed(),
            RemoveOutcome::Corrupted => "WARN".yellow().bold(),
        };
        let prefix = if ctx.dry_run && outcome == RemoveOutcome::Removed {
            "would be "
        } else {
            ""
        };
        println!(
            "   {} {} {}{}",
            label,
            path.display().to_string().cyan(),
            prefix,
            outcome
        );
    }
    Ok(())
}
