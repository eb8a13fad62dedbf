//! Pure section edits.
//!
//! These functions compute the next file content from the current one
//! (`None` for a missing file) and never perform I/O, so dry runs and the
//! file-level [`crate::patcher`] share one code path.

use std::fmt;

use crate::markers::MarkerPair;
use crate::parser::{SectionSpan, locate};

/// Separator placed between existing content and an appended section.
pub const APPEND_SEPARATOR: &str = "\n\n";

/// What [`plan_patch`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file did not exist; the section is the whole file.
    Created,
    /// An existing section was replaced in place.
    Replaced,
    /// The file had no start marker; the section was appended.
    AppendedNew,
    /// The start marker was present without a valid end marker. The section
    /// was appended and the stray start marker left where it was.
    AppendedCorrupted,
}

impl PatchOutcome {
    /// Outcomes the caller must report as a warning rather than success.
    pub fn is_warning(&self) -> bool {
        matches!(self, PatchOutcome::AppendedCorrupted)
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Created => write!(f, "created"),
            PatchOutcome::Replaced => write!(f, "replaced"),
            PatchOutcome::AppendedNew => write!(f, "appended"),
            PatchOutcome::AppendedCorrupted => write!(f, "appended (corrupted markers)"),
        }
    }
}

/// What [`plan_remove`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    FileAbsent,
    SectionAbsent,
    Removed,
    /// Start marker without a valid end marker. Nothing was changed, so the
    /// dangling start marker and whatever follows it stay in the file.
    Corrupted,
}

impl RemoveOutcome {
    pub fn is_warning(&self) -> bool {
        matches!(self, RemoveOutcome::Corrupted)
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::FileAbsent => write!(f, "file absent"),
            RemoveOutcome::SectionAbsent => write!(f, "no section"),
            RemoveOutcome::Removed => write!(f, "removed"),
            RemoveOutcome::Corrupted => write!(f, "left untouched (corrupted markers)"),
        }
    }
}

/// Insert or replace a section.
///
/// `new_content` is written verbatim and is expected to carry its own
/// markers (see [`MarkerPair::wrap`]); content without them cannot be found
/// again and every later patch appends another copy.
///
/// # Example
/// ```
/// use catalog_blocks::{MarkerPair, PatchOutcome, plan_patch};
///
/// let markers = MarkerPair::new("<!--S-->", "<!--E-->").unwrap();
/// let (next, outcome) = plan_patch(
///     Some("pre\n<!--S-->old<!--E-->\npost"),
///     "<!--S-->new<!--E-->",
///     &markers,
/// );
/// assert_eq!(next, "pre\n<!--S-->new<!--E-->\npost");
/// assert_eq!(outcome, PatchOutcome::Replaced);
/// ```
pub fn plan_patch(
    existing: Option<&str>,
    new_content: &str,
    markers: &MarkerPair,
) -> (String, PatchOutcome) {
    let Some(existing) = existing else {
        return (new_content.to_string(), PatchOutcome::Created);
    };

    match locate(existing, markers) {
        SectionSpan::Absent => (append(existing, new_content), PatchOutcome::AppendedNew),
        SectionSpan::Valid { start, end } => {
            let mut next =
                String::with_capacity(existing.len() - (end - start) + new_content.len());
            next.push_str(&existing[..start]);
            next.push_str(new_content);
            next.push_str(&existing[end..]);
            (next, PatchOutcome::Replaced)
        }
        SectionSpan::Corrupted { .. } => {
            (append(existing, new_content), PatchOutcome::AppendedCorrupted)
        }
    }
}

/// Remove a section.
///
/// Returns the new content only when something was removed. The content
/// before the section loses its trailing whitespace; everything after the
/// end marker is kept byte for byte.
pub fn plan_remove(existing: Option<&str>, markers: &MarkerPair) -> (Option<String>, RemoveOutcome) {
    let Some(existing) = existing else {
        return (None, RemoveOutcome::FileAbsent);
    };

    match locate(existing, markers) {
        SectionSpan::Absent => (None, RemoveOutcome::SectionAbsent),
        SectionSpan::Corrupted { .. } => (None, RemoveOutcome::Corrupted),
        SectionSpan::Valid { start, end } => {
            let next = format!("{}{}", existing[..start].trim_end(), &existing[end..]);
            (Some(next), RemoveOutcome::Removed)
        }
    }
}

fn append(existing: &str, new_content: &str) -> String {
    format!("{existing}{APPEND_SEPARATOR}{new_content}")
}
