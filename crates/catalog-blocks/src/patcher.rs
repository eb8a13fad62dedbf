//! File-level section patching.
//!
//! Each call is one whole-file read followed by at most one whole-file
//! write. There is no locking; concurrent patches of the same file race and
//! the last writer wins.

use std::path::Path;

use catalog_fs::io;

use crate::error::Result;
use crate::markers::MarkerPair;
use crate::parser::{SectionSpan, locate};
use crate::writer::{PatchOutcome, RemoveOutcome, plan_patch, plan_remove};

/// Insert, replace or append the section in `path`.
///
/// # Example
/// ```
/// use catalog_blocks::{MarkerPair, PatchOutcome, patch};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("OUT.md");
/// let markers = MarkerPair::html_comment("catalog");
///
/// assert_eq!(patch(&path, "X", &markers).unwrap(), PatchOutcome::Created);
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "X");
/// ```
pub fn patch(path: &Path, new_content: &str, markers: &MarkerPair) -> Result<PatchOutcome> {
    if !(new_content.contains(markers.start()) && new_content.contains(markers.end())) {
        tracing::warn!(
            path = %path.display(),
            "section content does not carry its markers; later patches will append"
        );
    }

    let existing = io::read_text_if_exists(path)?;
    let (next, outcome) = plan_patch(existing.as_deref(), new_content, markers);
    io::write_text(path, &next)?;

    if outcome.is_warning() {
        tracing::warn!(
            path = %path.display(),
            start = markers.start(),
            "start marker without a matching end marker; appended a fresh section"
        );
    } else {
        tracing::debug!(path = %path.display(), %outcome, "patched section");
    }
    Ok(outcome)
}

/// Remove the section from `path`.
///
/// Missing file and missing section are no-ops. A corrupted section is also
/// left untouched, unlike [`patch`] which appends past it.
pub fn remove(path: &Path, markers: &MarkerPair) -> Result<RemoveOutcome> {
    let existing = io::read_text_if_exists(path)?;
    let (next, outcome) = plan_remove(existing.as_deref(), markers);

    if let Some(next) = next {
        io::write_text(path, &next)?;
    }

    if outcome.is_warning() {
        tracing::warn!(
            path = %path.display(),
            start = markers.start(),
            "start marker without a matching end marker; section not removed"
        );
    } else {
        tracing::debug!(path = %path.display(), %outcome, "remove section");
    }
    Ok(outcome)
}

/// Marker and file presence for one target, as seen on disk right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStatus {
    pub file_exists: bool,
    pub has_start: bool,
    pub has_end: bool,
    pub span: SectionSpan,
}

impl SectionStatus {
    /// File present and the section well formed.
    pub fn is_installed(&self) -> bool {
        self.file_exists && self.span.is_valid()
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self.span, SectionSpan::Corrupted { .. })
    }
}

/// Re-read `path` and report what a patch or remove would find.
pub fn inspect(path: &Path, markers: &MarkerPair) -> Result<SectionStatus> {
    let status = match io::read_text_if_exists(path)? {
        None => SectionStatus {
            file_exists: false,
            has_start: false,
            has_end: false,
            span: SectionSpan::Absent,
        },
        Some(content) => SectionStatus {
            file_exists: true,
            has_start: content.contains(markers.start()),
            has_end: content.contains(markers.end()),
            span: locate(&content, markers),
        },
    };
    Ok(status)
}
