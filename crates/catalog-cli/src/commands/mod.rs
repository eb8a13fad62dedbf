//! Command implementations for catalog-cli

mod index;
mod remove;
mod sections;
mod validate;

use std::path::{Path, PathBuf};

use crate::config::CatalogConfig;
use crate::error::Result;

pub use index::run_index;
pub use remove::run_remove;
pub use sections::{run_install, run_update};
pub use validate::run_validate;

/// Loaded config plus the flags every command needs.
#[derive(Debug)]
pub struct Context {
    pub config: CatalogConfig,
    pub base_dir: PathBuf,
    pub dry_run: bool,
}

impl Context {
    pub fn load(config_path: &Path, dry_run: bool) -> Result<Self> {
        let (config, base_dir) = CatalogConfig::load(config_path)?;
        Ok(Self {
            config,
            base_dir,
            dry_run,
        })
    }

    /// Resolve a config-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}
