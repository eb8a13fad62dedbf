//! Catalog source loading.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::assembler::{IndexAssembler, IndexDocument};
use crate::error::{Error, Result};
use crate::scanner::MethodScanner;

/// Read the markdown catalog. A missing file is fatal for index generation.
pub fn load_source(path: &Path) -> Result<String> {
    catalog_fs::io::read_text_if_exists(path)?.ok_or_else(|| Error::SourceNotFound {
        path: path.to_path_buf(),
    })
}

/// Load, scan and assemble in one call.
pub fn compile_file(
    path: &Path,
    scanner: &MethodScanner,
    assembler: &IndexAssembler,
    generated_at: DateTime<Utc>,
) -> Result<IndexDocument> {
    let text = load_source(path)?;
    let methods = scanner.scan(&text);
    tracing::info!(source = %path.display(), methods = methods.len(), "compiled catalog");
    Ok(assembler.assemble(methods, generated_at))
}
