//! Grapheme-aware offset conversion.
//!
//! Selections arrive as character offsets from a caret. Slicing needs byte
//! offsets, and a boundary must never land inside a grapheme cluster (a ZWJ
//! emoji or a letter with a combining mark), or the exported text would
//! carry half a character on each side of an escape sequence.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Number of characters (Unicode scalar values) in a string.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character offset to a byte offset.
///
/// `char_idx == char_len(s)` maps to `s.len()`. Returns `None` past the end.
#[must_use]
pub fn char_to_byte(s: &str, char_idx: usize) -> Option<usize> {
    if char_idx == 0 {
        return Some(0);
    }
    s.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(s.len()))
        .nth(char_idx)
}

/// Widen a byte range outward to the enclosing grapheme cluster boundaries.
///
/// Both ends must already be char boundaries.
#[must_use]
pub fn snap_to_graphemes(s: &str, range: Range<usize>) -> Range<usize> {
    // CRLF is the only multi-char cluster made of ASCII.
    if s.is_ascii() && !s.contains('\r') {
        return range;
    }

    let mut start = range.start;
    let mut end = range.end;
    for (offset, grapheme) in s.grapheme_indices(true) {
        let cluster_end = offset + grapheme.len();
        if offset < range.start && range.start < cluster_end {
            start = offset;
        }
        if offset < range.end && range.end < cluster_end {
            end = cluster_end;
        }
        if offset >= range.end {
            break;
        }
    }
    start..end
}

/// Map a character range onto a grapheme-aligned byte range.
///
/// Returns `None` if the range is empty, reversed, or past the end.
#[must_use]
pub fn selection_bytes(s: &str, chars: Range<usize>) -> Option<Range<usize>> {
    if chars.start >= chars.end {
        return None;
    }
    let start = char_to_byte(s, chars.start)?;
    let end = char_to_byte(s, chars.end)?;
    Some(snap_to_graphemes(s, start..end))
}
