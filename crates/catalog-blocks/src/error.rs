//! Error types for catalog-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] catalog_fs::Error),

    #[error("Invalid marker pair: {reason}")]
    InvalidMarkers { reason: String },
}
