//! Segment storage and editing.
//!
//! Key types:
//!
//! - [`Segment`]: A run of text with an optional style
//! - [`Document`]: The immutable segment list covering the whole text
//! - [`Editor`]: Session state (brush, options) driving a document
//!
//! The four core operations are also available as free functions taking
//! and returning documents by value.
//!
//! # Examples
//!
//! ```
//! use ansi_block::text::{apply_style, flatten_plain_text, reset_to_plain_text, serialize_ansi};
//! use ansi_block::{Color, Style};
//!
//! let doc = reset_to_plain_text("hello");
//! let doc = apply_style(&doc, 0..5, Style::new(Color::Red));
//! assert_eq!(flatten_plain_text(&doc), "hello");
//! assert_eq!(serialize_ansi(&doc), "```ansi\n[31mhello[0m\n```");
//! ```

mod document;
mod editor;
mod segment;

pub use crate::ansi::serialize_ansi;
pub use document::{ApplyMode, Document};
pub use editor::{Editor, ExportOptions};
pub use segment::Segment;

use crate::style::Style;
use std::ops::Range;

/// Apply `style` to a character range, splicing it into the segment list.
#[must_use]
pub fn apply_style(document: &Document, chars: Range<usize>, style: Style) -> Document {
    document.apply_style(chars, style)
}

/// Single unformatted segment holding `text`.
#[must_use]
pub fn reset_to_plain_text(text: &str) -> Document {
    Document::from_plain(text)
}

/// Concatenation of all segment texts.
#[must_use]
pub fn flatten_plain_text(document: &Document) -> String {
    document.plain_text()
}
