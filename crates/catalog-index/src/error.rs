//! Error types for catalog-index

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Catalog source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Filesystem error: {0}")]
    Fs(#[from] catalog_fs::Error),

    #[error("Invalid invocation pattern for namespace '{namespace}': {source}")]
    Pattern {
        namespace: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),
}
