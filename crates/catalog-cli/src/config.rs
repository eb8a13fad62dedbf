//! Catalog configuration file
//!
//! ```toml
//! [index]
//! source = "docs/METHODS.md"
//! output = "docs/index.json"
//! version = "1.0.0"
//! namespace = "$memberstackDom"
//!
//! [quick_reference]
//! authentication = ["loginMemberEmailPassword", "logout"]
//!
//! [[targets]]
//! path = "CLAUDE.md"
//! section = "catalog"
//! markers = "html"
//! content = "templates/claude.md"
//! ```
//!
//! Relative paths are resolved against the directory holding the config
//! file.

use std::path::{Path, PathBuf};

use catalog_blocks::{MarkerPair, MarkerStyle};
use catalog_fs::ConfigStore;
use catalog_index::QuickReference;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Index generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Markdown catalog to scan
    pub source: PathBuf,
    /// Where the JSON index is written
    pub output: PathBuf,
    #[serde(default = "default_version")]
    pub version: String,
    /// Object the documented methods are called on
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Document name for `docLocation` pointers; defaults to the source
    /// file name
    #[serde(default)]
    pub doc_location: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_namespace() -> String {
    "$memberstackDom".to_string()
}

/// One host file carrying a managed section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetConfig {
    pub path: PathBuf,
    /// Section name used inside the markers
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default)]
    pub markers: MarkerStyle,
    /// File holding the section body
    pub content: PathBuf,
}

fn default_section() -> String {
    "method-catalog".to_string()
}

impl TargetConfig {
    pub fn marker_pair(&self) -> MarkerPair {
        MarkerPair::for_style(self.markers, &self.section)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub index: IndexConfig,
    #[serde(default = "default_quick_reference")]
    pub quick_reference: QuickReference,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// Well-known methods surfaced when the config does not list its own.
pub fn default_quick_reference() -> QuickReference {
    let groups: [(&str, &[&str]); 4] = [
        (
            "authentication",
            &["loginMemberEmailPassword", "signupMemberEmailPassword", "logout"],
        ),
        ("members", &["getCurrentMember", "updateMember"]),
        ("plans", &["getPlans", "purchasePlansWithCheckout"]),
        ("ui", &["openModal", "hideModal"]),
    ];

    groups
        .into_iter()
        .map(|(group, names)| {
            (
                group.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

impl CatalogConfig {
    /// Load the config file; its parent directory becomes the base for
    /// relative paths.
    pub fn load(path: &Path) -> Result<(Self, PathBuf)> {
        let config: Self = ConfigStore::new().load(path).map_err(|e| {
            if e.is_not_found() {
                CliError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CliError::from(e)
            }
        })?;

        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok((config, base_dir))
    }

    /// Document name written into `docLocation` pointers.
    pub fn doc_location(&self) -> String {
        self.index.doc_location.clone().unwrap_or_else(|| {
            self.index
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
