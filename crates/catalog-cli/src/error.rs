//! Error types for catalog-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Fs(#[from] catalog_fs::Error),

    #[error(transparent)]
    Index(#[from] catalog_index::Error),

    #[error(transparent)]
    Blocks(#[from] catalog_blocks::Error),

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Section template for target {target} not found: {path}")]
    TemplateNotFound { target: PathBuf, path: PathBuf },

    #[error("Validation failed: {failures} problem(s) found")]
    Validation { failures: usize },
}
