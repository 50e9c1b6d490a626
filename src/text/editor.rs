//! Editing session state around a [`Document`].
//!
//! [`Editor`] holds what a front end would otherwise keep as ambient state:
//! the current text, the chosen color, and the bold/underline toggles. The
//! selection is always passed in explicitly.

use crate::ansi::{self, EscapeMode};
use crate::color::Color;
use crate::event::{self, LogLevel, emit_event, emit_log};
use crate::style::{Style, TextAttributes};
use crate::text::document::{ApplyMode, Document};
use crate::unicode;
use std::ops::Range;

/// Options controlling how formatting is applied and exported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Escape byte handling in the exported text.
    pub escape: EscapeMode,
    /// Placement of newly styled text.
    pub apply_mode: ApplyMode,
}

impl ExportOptions {
    #[must_use]
    pub const fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub const fn with_apply_mode(mut self, apply_mode: ApplyMode) -> Self {
        self.apply_mode = apply_mode;
        self
    }
}

/// A formatting session.
///
/// # Examples
///
/// ```
/// use ansi_block::{Color, Editor};
///
/// let mut editor = Editor::new();
/// editor.edit_text("Hi");
/// editor.select_color(Color::Blue);
/// editor.toggle_bold();
/// editor.toggle_underline();
/// assert!(editor.apply_to_selection(0..2));
/// assert_eq!(editor.copy_text(), "```ansi\n[1;4;34mHi[0m\n```");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Editor {
    document: Document,
    brush: Style,
    options: ExportOptions,
}

impl Editor {
    /// Create an empty session with the default brush (red, no attributes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given options.
    #[must_use]
    pub fn with_options(options: ExportOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> ExportOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ExportOptions) {
        self.options = options;
    }

    /// The current document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The flattened text shown in the edit box.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.plain_text()
    }

    /// The style the next apply will use.
    #[must_use]
    pub fn brush(&self) -> Style {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Style) {
        self.brush = brush;
    }

    pub fn select_color(&mut self, color: Color) {
        self.brush = self.brush.with_color(color);
    }

    pub fn toggle_bold(&mut self) {
        self.brush.attributes.toggle(TextAttributes::BOLD);
    }

    pub fn toggle_underline(&mut self) {
        self.brush.attributes.toggle(TextAttributes::UNDERLINE);
    }

    /// Apply the brush to a character selection.
    ///
    /// Returns whether the document changed. An empty or out-of-range
    /// selection, or one that already carries the brush, leaves the document
    /// untouched and emits nothing.
    pub fn apply_to_selection(&mut self, selection: Range<usize>) -> bool {
        let text = self.document.plain_text();
        if unicode::selection_bytes(&text, selection.clone()).is_none() {
            return false;
        }

        let next =
            self.document
                .apply_style_with_mode(selection, self.brush, self.options.apply_mode);
        if next == self.document {
            return false;
        }
        self.document = next;
        emit_event(
            event::FORMAT_APPLIED,
            &format!("Applied {} to the selected text.", self.brush),
        );
        true
    }

    /// Replace the text after a raw edit. All formatting is discarded.
    pub fn edit_text(&mut self, text: &str) {
        if self.document.has_formatting() {
            emit_log(LogLevel::Warn, "raw edit discarded formatting");
        }
        self.document = self.document.reset_to_plain_text(text);
    }

    /// Reset to empty text.
    pub fn clear(&mut self) {
        self.document = Document::new();
        emit_event(event::TEXT_CLEARED, "The editor has been reset.");
    }

    /// Produce the export text for the clipboard.
    #[must_use]
    pub fn copy_text(&self) -> String {
        let out = self.document.to_ansi_with_mode(self.options.escape);
        emit_event(event::COPIED, &out);
        out
    }

    /// Terminal rendering of the current document.
    #[must_use]
    pub fn preview(&self) -> String {
        ansi::render_preview(&self.document)
    }
}
