//! Region injection: replace only the text between a matched marker pair.
//!
//! A region is delimited by HTML-comment markers derived from its name:
//!
//! ```text
//! <!-- configuration:begin -->
//! ...replaced content...
//! <!-- configuration:end -->
//! ```
//!
//! Everything outside the markers is preserved byte-for-byte, and injecting
//! the same content twice produces an identical file.

use thiserror::Error;

/// Failure modes when locating a marker pair in a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    #[error("begin marker not found")]
    BeginMissing,

    #[error("end marker not found")]
    EndMissing,

    #[error("end marker appears before the begin marker")]
    MarkersReversed,
}

/// A named marker pair in a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The begin marker, e.g. `<!-- configuration:begin -->`.
    pub fn begin_marker(&self) -> String {
        format!("<!-- {}:begin -->", self.name)
    }

    /// The end marker, e.g. `<!-- configuration:end -->`.
    pub fn end_marker(&self) -> String {
        format!("<!-- {}:end -->", self.name)
    }

    /// Replace the span between this region's markers with `content`.
    ///
    /// The markers themselves stay in place; content is framed by single
    /// newlines so repeated injection of the same content is a no-op.
    pub fn inject(&self, original: &str, content: &str) -> Result<String, InjectError> {
        let begin = self.begin_marker();
        let end = self.end_marker();

        let begin_idx = original.find(&begin).ok_or(InjectError::BeginMissing)?;
        let after_begin = begin_idx + begin.len();

        let end_idx = match original[after_begin..].find(&end) {
            Some(offset) => after_begin + offset,
            None => {
                if original[..begin_idx].contains(&end) {
                    return Err(InjectError::MarkersReversed);
                }
                return Err(InjectError::EndMissing);
            }
        };

        let inner = content.trim_matches('\n');
        let mut result = String::with_capacity(original.len() + inner.len());
        result.push_str(&original[..after_begin]);
        result.push('\n');
        if !inner.is_empty() {
            result.push_str(inner);
            result.push('\n');
        }
        result.push_str(&original[end_idx..]);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Readme

Intro text.

<!-- configuration:begin -->
old content
<!-- configuration:end -->

Outro text.
";

    #[test]
    fn test_inject_replaces_only_inner_span() {
        let region = Region::new("configuration");
        let result = region.inject(DOC, "new content").unwrap();
        assert_eq!(
            result,
            "\
# Readme

Intro text.

<!-- configuration:begin -->
new content
<!-- configuration:end -->

Outro text.
"
        );
    }

    #[test]
    fn test_inject_is_idempotent() {
        let region = Region::new("configuration");
        let once = region.inject(DOC, "new content").unwrap();
        let twice = region.inject(&once, "new content").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inject_into_empty_region() {
        let region = Region::new("cfg");
        let doc = "a\n<!-- cfg:begin -->\n<!-- cfg:end -->\nb\n";
        let result = region.inject(doc, "filled").unwrap();
        assert_eq!(result, "a\n<!-- cfg:begin -->\nfilled\n<!-- cfg:end -->\nb\n");
    }

    #[test]
    fn test_inject_adjacent_markers() {
        let region = Region::new("cfg");
        let doc = "<!-- cfg:begin --><!-- cfg:end -->";
        let result = region.inject(doc, "x").unwrap();
        assert_eq!(result, "<!-- cfg:begin -->\nx\n<!-- cfg:end -->");
    }

    #[test]
    fn test_inject_empty_content() {
        let region = Region::new("cfg");
        let doc = "<!-- cfg:begin -->\nstale\n<!-- cfg:end -->\n";
        let result = region.inject(doc, "").unwrap();
        assert_eq!(result, "<!-- cfg:begin -->\n<!-- cfg:end -->\n");
    }

    #[test]
    fn test_missing_begin_marker() {
        let region = Region::new("cfg");
        assert_eq!(
            region.inject("no markers here", "x"),
            Err(InjectError::BeginMissing)
        );
    }

    #[test]
    fn test_missing_end_marker() {
        let region = Region::new("cfg");
        assert_eq!(
            region.inject("<!-- cfg:begin -->\n", "x"),
            Err(InjectError::EndMissing)
        );
    }

    #[test]
    fn test_reversed_markers() {
        let region = Region::new("cfg");
        let doc = "<!-- cfg:end -->\n<!-- cfg:begin -->\n";
        assert_eq!(region.inject(doc, "x"), Err(InjectError::MarkersReversed));
    }

    #[test]
    fn test_other_regions_untouched() {
        let region = Region::new("a");
        let doc = "<!-- a:begin -->\nold\n<!-- a:end -->\n<!-- b:begin -->\nkeep\n<!-- b:end -->\n";
        let result = region.inject(doc, "new").unwrap();
        assert!(result.contains("<!-- b:begin -->\nkeep\n<!-- b:end -->"));
    }
}
