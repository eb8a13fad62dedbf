//! Marker-delimited section patching.
//!
//! A section is the byte range from a start marker through the end of its
//! end marker inside a host file that is otherwise edited by hand:
//!
//! ```text
//! user text
//! <!-- BEGIN catalog -->
//! managed content
//! <!-- END catalog -->
//! more user text
//! ```
//!
//! Bytes before the start marker and after the end marker are never touched.
//!
//! # Layers
//!
//! - [`parser`] locates the section span inside a string.
//! - [`writer`] computes the new file content and an outcome without I/O.
//! - [`patcher`] reads the file, applies the writer, writes it back.
//!
//! # Corrupted markers
//!
//! When the start marker is present but the end marker is missing or sits
//! at or before it, [`patch`] appends a fresh section and reports
//! [`PatchOutcome::AppendedCorrupted`], while [`remove`] leaves the file alone
//! and reports [`RemoveOutcome::Corrupted`]. Callers surface both as warnings.

pub mod error;
pub mod markers;
pub mod parser;
pub mod patcher;
pub mod writer;

pub use error::{Error, Result};
pub use markers::{MarkerPair, MarkerStyle};
pub use parser::{SectionSpan, extract_section, locate};
pub use patcher::{SectionStatus, inspect, patch, remove};
pub use writer::{PatchOutcome, RemoveOutcome, plan_patch, plan_remove};
