//! Marker pairs bounding a section.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Comment convention used to build a marker pair from a section name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    /// `<!-- BEGIN name -->` / `<!-- END name -->`, for markdown and HTML.
    #[default]
    Html,
    /// `# BEGIN name` / `# END name`, for dotfiles, shell and YAML.
    Hash,
}

impl FromStr for MarkerStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" | "html-comment" | "markdown" => Ok(MarkerStyle::Html),
            "hash" | "hash-comment" | "shell" => Ok(MarkerStyle::Hash),
            _ => Err(Error::InvalidMarkers {
                reason: format!("unknown marker style '{s}'"),
            }),
        }
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerStyle::Html => write!(f, "html"),
            MarkerStyle::Hash => write!(f, "hash"),
        }
    }
}

/// The two literal strings bounding a section.
///
/// Markers are fixed by the caller and never derived from file content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// Build a pair from arbitrary literals. Both must be non-empty and
    /// distinct.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() || end.is_empty() {
            return Err(Error::InvalidMarkers {
                reason: "markers must not be empty".into(),
            });
        }
        if start == end {
            return Err(Error::InvalidMarkers {
                reason: format!("start and end marker are both '{start}'"),
            });
        }
        Ok(Self { start, end })
    }

    pub fn html_comment(name: &str) -> Self {
        Self {
            start: format!("<!-- BEGIN {name} -->"),
            end: format!("<!-- END {name} -->"),
        }
    }

    pub fn hash_comment(name: &str) -> Self {
        Self {
            start: format!("# BEGIN {name}"),
            end: format!("# END {name}"),
        }
    }

    pub fn for_style(style: MarkerStyle, name: &str) -> Self {
        match style {
            MarkerStyle::Html => Self::html_comment(name),
            MarkerStyle::Hash => Self::hash_comment(name),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Surround a body with the markers, one per line.
    ///
    /// Patching with wrapped content is what makes re-installs replace
    /// rather than append.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}\n{}\n{}", self.start, body.trim_end_matches('\n'), self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_comment_markers() {
        let pair = MarkerPair::html_comment("catalog");
        assert_eq!(pair.start(), "<!-- BEGIN catalog -->");
        assert_eq!(pair.end(), "<!-- END catalog -->");
    }

    #[test]
    fn test_hash_comment_markers() {
        let pair = MarkerPair::for_style(MarkerStyle::Hash, "catalog");
        assert_eq!(pair.start(), "# BEGIN catalog");
        assert_eq!(pair.end(), "# END catalog");
    }

    #[test]
    fn test_wrap() {
        let pair = MarkerPair::html_comment("x");
        assert_eq!(
            pair.wrap("body\n"),
            "<!-- BEGIN x -->\nbody\n<!-- END x -->"
        );
    }

    #[test]
    fn test_new_rejects_empty_and_equal() {
        assert!(MarkerPair::new("", "end").is_err());
        assert!(MarkerPair::new("same", "same").is_err());
        assert!(MarkerPair::new("<!--S-->", "<!--E-->").is_ok());
    }

    #[test]
    fn test_style_from_str() {
        assert_eq!("HTML".parse::<MarkerStyle>().unwrap(), MarkerStyle::Html);
        assert_eq!("hash".parse::<MarkerStyle>().unwrap(), MarkerStyle::Hash);
        assert!("xml".parse::<MarkerStyle>().is_err());
    }
}
