//! The segment store.
//!
//! A [`Document`] is an immutable, ordered list of [`Segment`]s whose texts
//! concatenate to the full editable text. Every operation returns a new
//! document; nothing is mutated in place.
//!
//! Offsets passed to [`Document::apply_style`] are character offsets into
//! the flattened text and are widened to grapheme cluster boundaries before
//! use.

use crate::ansi::{self, EscapeMode};
use crate::event::{LogLevel, emit_log};
use crate::style::Style;
use crate::text::segment::Segment;
use crate::unicode;
use std::ops::Range;

/// How [`Document::apply_style_with_mode`] places the new styled segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApplyMode {
    /// Split overlapping segments at the selection edges, replace the
    /// covered text with one styled segment, and merge equal neighbors.
    #[default]
    Splice,
    /// Legacy behavior. The first formatting rebuilds the list as
    /// before/styled/after; later ones append the styled text and the text
    /// after the selection to the end of the list, growing the text.
    Append,
}

/// Ordered, gap-free sequence of segments covering the whole text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document: one unformatted segment holding `""`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_plain("")
    }

    /// Create a document holding `text` as one unformatted segment.
    #[must_use]
    pub fn from_plain(text: &str) -> Self {
        Self {
            segments: vec![Segment::plain(text)],
        }
    }

    /// Build a document from arbitrary segments.
    ///
    /// Empty segments are dropped and adjacent segments with equal styles
    /// are merged.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            segments: normalize(segments),
        }
    }

    /// The segments in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Concatenate all segment texts.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Total length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.segments.iter().map(Segment::len_chars).sum()
    }

    /// Check whether the document holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_empty)
    }

    /// Check whether any segment carries a style.
    #[must_use]
    pub fn has_formatting(&self) -> bool {
        self.segments.iter().any(Segment::is_formatted)
    }

    /// Character ranges and styles of every formatted segment.
    #[must_use]
    pub fn styled_ranges(&self) -> Vec<(Range<usize>, Style)> {
        let mut ranges = Vec::new();
        let mut pos = 0;
        for segment in &self.segments {
            let len = segment.len_chars();
            if let Some(style) = segment.style {
                ranges.push((pos..pos + len, style));
            }
            pos += len;
        }
        ranges
    }

    /// Apply `style` to the character range `chars` using [`ApplyMode::Splice`].
    #[must_use]
    pub fn apply_style(&self, chars: Range<usize>, style: Style) -> Self {
        self.apply_style_with_mode(chars, style, ApplyMode::Splice)
    }

    /// Apply `style` to the character range `chars`.
    ///
    /// Empty, reversed, or out-of-range selections return an unchanged copy.
    #[must_use]
    pub fn apply_style_with_mode(
        &self,
        chars: Range<usize>,
        style: Style,
        mode: ApplyMode,
    ) -> Self {
        let text = self.plain_text();
        let Some(bytes) = unicode::selection_bytes(&text, chars.clone()) else {
            emit_log(
                LogLevel::Debug,
                &format!(
                    "ignoring selection {}..{} on text of {} chars",
                    chars.start,
                    chars.end,
                    unicode::char_len(&text)
                ),
            );
            return self.clone();
        };

        match mode {
            ApplyMode::Splice => self.splice(&text, bytes, style),
            ApplyMode::Append => self.append(&text, bytes, style),
        }
    }

    /// Collapse to one unformatted segment holding `text`.
    ///
    /// Used for raw edits of the text box; all formatting is discarded.
    #[must_use]
    pub fn reset_to_plain_text(&self, text: &str) -> Self {
        Self::from_plain(text)
    }

    /// Serialize to the fenced export format with bare escape sequences.
    #[must_use]
    pub fn to_ansi(&self) -> String {
        ansi::serialize_ansi(self)
    }

    /// Serialize to the fenced export format.
    #[must_use]
    pub fn to_ansi_with_mode(&self, mode: EscapeMode) -> String {
        ansi::serialize_ansi_with_mode(self, mode)
    }

    fn splice(&self, text: &str, bytes: Range<usize>, style: Style) -> Self {
        let before = self.slice(0..bytes.start);
        let after = self.slice(bytes.end..text.len());
        let middle = Segment::styled(&text[bytes], style);

        Self::from_segments(before.chain(std::iter::once(middle)).chain(after))
    }

    fn append(&self, text: &str, bytes: Range<usize>, style: Style) -> Self {
        let mut segments = if self.has_formatting() {
            self.segments.clone()
        } else {
            let mut fresh = Vec::with_capacity(3);
            if bytes.start > 0 {
                fresh.push(Segment::plain(&text[..bytes.start]));
            }
            fresh
        };

        segments.push(Segment::styled(&text[bytes.clone()], style));
        if bytes.end < text.len() {
            segments.push(Segment::plain(&text[bytes.end..]));
        }

        Self { segments }
    }

    /// Pieces of the segments that intersect the byte range `range`.
    fn slice(&self, range: Range<usize>) -> impl Iterator<Item = Segment> + '_ {
        let mut pos = 0;
        self.segments.iter().filter_map(move |segment| {
            let seg_start = pos;
            pos += segment.len();
            let start = range.start.max(seg_start);
            let end = range.end.min(pos);
            (start < end).then(|| {
                Segment::new(
                    &segment.text[start - seg_start..end - seg_start],
                    segment.style,
                )
            })
        })
    }
}

/// Drop empty segments and merge equal-style neighbors.
///
/// Always yields at least one segment.
fn normalize(segments: impl IntoIterator<Item = Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.style == segment.style => last.text.push_str(&segment.text),
            _ => out.push(segment),
        }
    }
    if out.is_empty() {
        out.push(Segment::plain(""));
    }
    out
}
