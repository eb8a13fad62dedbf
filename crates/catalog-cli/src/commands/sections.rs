//! Install and update commands

use std::path::Path;

use catalog_blocks::{MarkerPair, PatchOutcome, patch, plan_patch};
use catalog_fs::io;
use colored::Colorize;

use super::{Context, run_index};
use crate::config::TargetConfig;
use crate::error::{CliError, Result};

/// Compile the index, then patch every target.
pub fn run_install(ctx: &Context) -> Result<()> {
    run_index(ctx)?;
    patch_targets(ctx, false)
}

/// Compile the index, then patch only targets that already exist.
pub fn run_update(ctx: &Context) -> Result<()> {
    run_index(ctx)?;
    patch_targets(ctx, true)
}

fn patch_targets(ctx: &Context, existing_only: bool) -> Result<()> {
    if ctx.config.targets.is_empty() {
        println!("{} No targets configured.", "=>".blue().bold());
        return Ok(());
    }

    let mut warnings = 0;
    for target in &ctx.config.targets {
        let path = ctx.resolve(&target.path);
        if existing_only && !path.exists() {
            println!(
                "   {} {} (not installed, skipped)",
                "-".dimmed(),
                path.display()
            );
            continue;
        }

        let markers = target.marker_pair();
        let section = load_section(ctx, target, &markers)?;

        let outcome = if ctx.dry_run {
            let existing = io::read_text_if_exists(&path)?;
            plan_patch(existing.as_deref(), &section, &markers).1
        } else {
            patch(&path, &section, &markers)?
        };

        report(&path, outcome, ctx.dry_run);
        if outcome.is_warning() {
            warnings += 1;
        }
    }

    if warnings > 0 {
        println!();
        println!(
            "{} {} target(s) had a start marker without a matching end marker.",
            "WARNING".yellow().bold(),
            warnings
        );
        println!("A fresh section was appended; remove the stray marker by hand.");
    }
    Ok(())
}

/// Read the section body and surround it with markers unless the template
/// already carries them.
pub(super) fn load_section(ctx: &Context, target: &TargetConfig, markers: &MarkerPair) -> Result<String> {
    let content_path = ctx.resolve(&target.content);
    let body = io::read_text_if_exists(&content_path)?.ok_or_else(|| CliError::TemplateNotFound {
        target: target.path.clone(),
        path: content_path.clone(),
    })?;

    if body.contains(markers.start()) && body.contains(markers.end()) {
        Ok(body)
    } else {
        Ok(markers.wrap(&body))
    }
}

fn report(path: &Path, outcome: PatchOutcome, dry_run: bool) {
    let verb = if dry_run { "would be " } else { "" };
    let label = match outcome {
        PatchOutcome::Created | PatchOutcome::Replaced | PatchOutcome::AppendedNew => {
            "OK".green().bold()
        }
        PatchOutcome::AppendedCorrupted => "WARN".yellow().bold(),
    };
    println!(
        "   {} {} {}{}",
        label,
        path.display().to_string().cyan(),
        verb,
        outcome
    );
}
