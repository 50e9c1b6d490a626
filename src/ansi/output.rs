//! Document serialization for export and terminal preview.

use crate::ansi::{self, EscapeMode, sequences};
use crate::text::Document;
use std::io::{self, Write};

/// Write the fenced export form of `doc` to a writer.
///
/// Unformatted segments are written verbatim. Each formatted segment
/// becomes its own `ansi` code block holding the opening sequence, the
/// text, and a reset.
pub fn write_ansi(w: &mut impl Write, doc: &Document, mode: EscapeMode) -> io::Result<()> {
    for segment in doc.segments() {
        match segment.style {
            None => w.write_all(segment.text.as_bytes())?,
            Some(style) => {
                w.write_all(sequences::FENCE_OPEN.as_bytes())?;
                ansi::write_sgr(w, style, mode)?;
                w.write_all(segment.text.as_bytes())?;
                ansi::write_reset(w, mode)?;
                w.write_all(sequences::FENCE_CLOSE.as_bytes())?;
            }
        }
    }
    Ok(())
}

/// Write `doc` for display in a real terminal.
///
/// Styled runs are wrapped in ESC-prefixed sequences and no code fences are
/// emitted.
pub fn write_preview(w: &mut impl Write, doc: &Document) -> io::Result<()> {
    for segment in doc.segments() {
        match segment.style {
            None => w.write_all(segment.text.as_bytes())?,
            Some(style) => {
                ansi::write_sgr(w, style, EscapeMode::Esc)?;
                w.write_all(segment.text.as_bytes())?;
                ansi::write_reset(w, EscapeMode::Esc)?;
            }
        }
    }
    Ok(())
}

/// Serialize `doc` to the export text with bare sequences.
#[must_use]
pub fn serialize_ansi(doc: &Document) -> String {
    serialize_ansi_with_mode(doc, EscapeMode::Bare)
}

/// Serialize `doc` to the export text.
#[must_use]
pub fn serialize_ansi_with_mode(doc: &Document, mode: EscapeMode) -> String {
    render_to_string(doc, |buf, doc| write_ansi(buf, doc, mode))
}

/// Render `doc` for display in a real terminal.
#[must_use]
pub fn render_preview(doc: &Document) -> String {
    render_to_string(doc, |buf, doc| write_preview(buf, doc))
}

/// Run a writer over an in-memory buffer.
///
/// Writes into a `Vec` cannot fail, and every piece written is UTF-8.
fn render_to_string(
    doc: &Document,
    write: impl FnOnce(&mut Vec<u8>, &Document) -> io::Result<()>,
) -> String {
    let mut buf = Vec::with_capacity(doc.segments().iter().map(|s| s.len() + 24).sum());
    let _ = write(&mut buf, doc);
    String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
