//! Index compilation command

use catalog_fs::ConfigStore;
use catalog_index::{IndexAssembler, IndexDocument, MethodScanner, compile_file};
use chrono::Utc;
use colored::Colorize;

use super::Context;
use crate::error::Result;

/// Compile the catalog and write the index.
///
/// The output extension picks the format (`.json`, `.yaml`/`.yml`, `.toml`).
/// On a dry run the index is compiled but not written.
pub fn run_index(ctx: &Context) -> Result<IndexDocument> {
    let index_config = &ctx.config.index;
    let source = ctx.resolve(&index_config.source);
    let output = ctx.resolve(&index_config.output);

    println!(
        "{} Compiling {}...",
        "=>".blue().bold(),
        source.display().to_string().cyan()
    );

    let scanner = MethodScanner::new(&index_config.namespace)?;
    let assembler = IndexAssembler::new(index_config.version.clone())
        .with_doc_location(ctx.config.doc_location())
        .with_quick_reference(ctx.config.quick_reference.clone());
    let index = compile_file(&source, &scanner, &assembler, Utc::now())?;

    for (category, methods) in &index.categories {
        println!("   {} {:<16} {}", "-".dimmed(), category, methods.len());
    }

    if ctx.dry_run {
        println!(
            "{} Would write {} methods to {}",
            "DRY RUN".yellow().bold(),
            index.total_methods,
            output.display()
        );
        return Ok(index);
    }

    ConfigStore::new().save(&output, &index)?;

    println!(
        "{} Wrote {} methods to {}",
        "OK".green().bold(),
        index.total_methods,
        output.display().to_string().cyan()
    );
    Ok(index)
}
