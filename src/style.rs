//! Text styling with a palette color and attributes.
//!
//! This module provides types for describing how a run of text is painted:
//!
//! - [`TextAttributes`]: Bitflags for bold and underline
//! - [`Style`]: A palette color plus attributes
//!
//! # Examples
//!
//! ```
//! use ansi_block::{Color, Style};
//!
//! let warning = Style::new(Color::Yellow).with_bold();
//! assert!(warning.is_bold());
//! assert!(!warning.is_underline());
//! assert_eq!(warning.to_string(), "yellow bold");
//! ```

use crate::color::Color;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text rendering attributes understood by the code-block renderer.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Underlined text.
        const UNDERLINE = 0x02;
    }
}

/// Complete style for a formatted segment.
///
/// Styles are immutable and cheap to copy. Use the `with_*` methods to
/// create modified versions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub color: Color,
    /// Bold/underline flags.
    pub attributes: TextAttributes,
}

impl Style {
    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style from explicit toggle states.
    #[must_use]
    pub fn from_flags(color: Color, bold: bool, underline: bool) -> Self {
        let mut attributes = TextAttributes::empty();
        attributes.set(TextAttributes::BOLD, bold);
        attributes.set(TextAttributes::UNDERLINE, underline);
        Self { color, attributes }
    }

    /// Return a new style with the specified color.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::UNDERLINE),
            ..self
        }
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.attributes.contains(TextAttributes::BOLD)
    }

    #[must_use]
    pub const fn is_underline(&self) -> bool {
        self.attributes.contains(TextAttributes::UNDERLINE)
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// Human-readable description, e.g. `"red bold underline"`.
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color.name())?;
        if self.is_bold() {
            f.write_str(" bold")?;
        }
        if self.is_underline() {
            f.write_str(" underline")?;
        }
        Ok(())
    }
}
