//! `ansi_block` - Styled text segments for chat `ansi` code blocks
//!
//! Tracks which ranges of a text block carry a palette color and optional
//! bold/underline, and serializes the whole block into the fenced
//! ```` ```ansi ```` form that chat code-block renderers color.
//!
//! # Examples
//!
//! ```
//! use ansi_block::{Color, Document, Style};
//!
//! let doc = Document::from_plain("Hi");
//! let doc = doc.apply_style(0..2, Style::new(Color::Blue).with_bold().with_underline());
//! assert_eq!(doc.to_ansi(), "```ansi\n[1;4;34mHi[0m\n```");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow ansi::AnsiWriter-style names
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Setters and toggles are fine without it
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for Range arguments
#![allow(clippy::cast_possible_truncation)] // Palette offsets fit in u8

pub mod ansi;
pub mod color;
pub mod error;
pub mod event;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Color;
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, emit_event, emit_log, set_event_callback, set_log_callback,
};
pub use style::{Style, TextAttributes};

// Re-export ANSI types
pub use ansi::{
    EscapeMode, render_preview, serialize_ansi, serialize_ansi_with_mode, write_ansi, write_preview,
};

// Re-export text types
pub use text::{
    ApplyMode, Document, Editor, ExportOptions, Segment, apply_style, flatten_plain_text,
    reset_to_plain_text,
};
