//! Filesystem layer for the method catalog tools
//!
//! Whole-file text reads and writes plus format-agnostic config loading.
//! Everything here is synchronous; callers own any ordering between files.

pub mod config;
pub mod error;
pub mod io;

pub use config::{ConfigFormat, ConfigStore};
pub use error::{Error, Result};
