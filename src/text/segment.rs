//! Styled text segments.

use crate::style::Style;

/// A run of text with an optional style.
///
/// `style == None` means the run is exported verbatim with no escape codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// The text content.
    pub text: String,
    /// Style applied to this segment, if any.
    pub style: Option<Style>,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Option<Style>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unformatted segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// Create a formatted segment.
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(text, Some(style))
    }

    /// Check whether this segment carries a style.
    #[must_use]
    pub fn is_formatted(&self) -> bool {
        self.style.is_some()
    }

    /// Length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
