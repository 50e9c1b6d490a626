//! ANSI SGR sequence generation.
//!
//! The export format wraps every styled segment in its own fenced block:
//!
//! ~~~text
//! ```ansi
//! [1;4;34mHi[0m
//! ```
//! ~~~
//!
//! Parameters are ordered bold, underline, color. Whether the control byte
//! precedes each `[` is chosen by [`EscapeMode`].

pub mod output;
pub mod sequences;

pub use output::{
    render_preview, serialize_ansi, serialize_ansi_with_mode, write_ansi, write_preview,
};
pub use sequences::*;

use crate::style::Style;
use std::io::{self, Write};

/// Whether escape sequences carry the leading ESC control byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EscapeMode {
    /// Bracket-only sequences such as `[31m`; the exact legacy export text.
    #[default]
    Bare,
    /// ESC-prefixed sequences such as `\x1b[31m`.
    Esc,
}

impl EscapeMode {
    /// Prefix written before each `[`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Bare => "",
            Self::Esc => sequences::ESC,
        }
    }
}

/// Write a u8 as decimal digits to a writer without formatting overhead.
#[inline]
fn write_u8_decimal(w: &mut impl Write, n: u8) -> io::Result<()> {
    if n >= 100 {
        w.write_all(&[b'0' + n / 100, b'0' + (n / 10) % 10, b'0' + n % 10])
    } else if n >= 10 {
        w.write_all(&[b'0' + n / 10, b'0' + n % 10])
    } else {
        w.write_all(&[b'0' + n])
    }
}

/// SGR parameters for a style, in emission order.
///
/// The color code is the base; underline is prefixed to it, then bold is
/// prefixed to that, giving `1;4;<color>` when both are set.
#[must_use]
pub fn sgr_params(style: Style) -> Vec<u8> {
    let mut params = Vec::with_capacity(3);
    if style.is_bold() {
        params.push(sequences::BOLD);
    }
    if style.is_underline() {
        params.push(sequences::UNDERLINE);
    }
    params.push(style.color.code());
    params
}

/// Write the opening SGR sequence for a style.
pub fn write_sgr(w: &mut impl Write, style: Style, mode: EscapeMode) -> io::Result<()> {
    w.write_all(mode.prefix().as_bytes())?;
    w.write_all(b"[")?;
    for (i, param) in sgr_params(style).into_iter().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        write_u8_decimal(w, param)?;
    }
    w.write_all(b"m")
}

/// Write the reset sequence.
pub fn write_reset(w: &mut impl Write, mode: EscapeMode) -> io::Result<()> {
    w.write_all(mode.prefix().as_bytes())?;
    w.write_all(RESET_BARE.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn sgr_bytes(style: Style, mode: EscapeMode) -> String {
        let mut buf = Vec::new();
        write_sgr(&mut buf, style, mode).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sgr_color_only() {
        assert_eq!(sgr_bytes(Style::new(Color::Red), EscapeMode::Bare), "[31m");
        assert_eq!(sgr_bytes(Style::new(Color::White), EscapeMode::Bare), "[37m");
    }

    #[test]
    fn test_sgr_attribute_order() {
        let base = Style::new(Color::Blue);
        assert_eq!(sgr_params(base.with_bold()), vec![1, 34]);
        assert_eq!(sgr_params(base.with_underline()), vec![4, 34]);
        assert_eq!(sgr_params(base.with_underline().with_bold()), vec![1, 4, 34]);
        assert_eq!(
            sgr_bytes(base.with_underline().with_bold(), EscapeMode::Bare),
            "[1;4;34m"
        );
    }

    #[test]
    fn test_escape_mode_prefix() {
        let style = Style::new(Color::Green);
        assert_eq!(sgr_bytes(style, EscapeMode::Bare), "[32m");
        assert_eq!(sgr_bytes(style, EscapeMode::Esc), "\x1b[32m");

        let mut buf = Vec::new();
        write_reset(&mut buf, EscapeMode::Esc).unwrap();
        assert_eq!(buf, RESET.as_bytes());

        let mut buf = Vec::new();
        write_reset(&mut buf, EscapeMode::Bare).unwrap();
        assert_eq!(buf, RESET_BARE.as_bytes());
    }

    #[test]
    fn test_write_u8_decimal() {
        let mut buf = Vec::new();
        write_u8_decimal(&mut buf, 7).unwrap();
        write_u8_decimal(&mut buf, 42).unwrap();
        write_u8_decimal(&mut buf, 255).unwrap();
        assert_eq!(buf, b"742255");
    }
}
