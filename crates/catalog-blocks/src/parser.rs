//! Section location.

use crate::markers::MarkerPair;

/// Where a section sits inside some content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSpan {
    /// The start marker does not occur.
    Absent,
    /// `start..end` covers the start marker through the end of the end
    /// marker.
    Valid { start: usize, end: usize },
    /// The start marker occurs at `start` but no end marker closes it: the
    /// end marker is missing or its first occurrence ends at or before the
    /// start marker.
    Corrupted { start: usize },
}

impl SectionSpan {
    pub fn is_valid(&self) -> bool {
        matches!(self, SectionSpan::Valid { .. })
    }
}

/// Locate the section bounded by `markers`.
///
/// Both markers are searched from the beginning of the content,
/// independently of each other. Only the first occurrence of each counts.
///
/// # Example
/// ```
/// use catalog_blocks::{MarkerPair, SectionSpan, locate};
///
/// let markers = MarkerPair::new("<!--S-->", "<!--E-->").unwrap();
/// let span = locate("pre\n<!--S-->old<!--E-->\npost", &markers);
/// assert_eq!(span, SectionSpan::Valid { start: 4, end: 23 });
/// ```
pub fn locate(content: &str, markers: &MarkerPair) -> SectionSpan {
    let Some(start) = content.find(markers.start()) else {
        return SectionSpan::Absent;
    };

    match content.find(markers.end()) {
        Some(end_pos) if end_pos + markers.end().len() > start => SectionSpan::Valid {
            start,
            end: end_pos + markers.end().len(),
        },
        _ => SectionSpan::Corrupted { start },
    }
}

/// The full text of a valid section, markers included.
pub fn extract_section<'a>(content: &'a str, markers: &MarkerPair) -> Option<&'a str> {
    match locate(content, markers) {
        SectionSpan::Valid { start, end } => Some(&content[start..end]),
        _ => None,
    }
}
