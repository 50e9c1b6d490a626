//! Error types for ansi_block.

use std::fmt;
use std::io;

/// Result type alias for ansi_block operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ansi_block operations.
///
/// Document operations themselves never fail; these cover the edges where
/// caller input is parsed or output is written.
#[derive(Debug)]
pub enum Error {
    /// I/O error while writing serialized output.
    Io(io::Error),
    /// Color name not in the palette.
    InvalidColor(String),
    /// Selection that is empty, reversed, or past the end of the text.
    InvalidRange { start: usize, end: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidColor(s) => write!(f, "invalid color: {s}"),
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for text of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
