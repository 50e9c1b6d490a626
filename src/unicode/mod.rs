//! Unicode utilities for selection offsets.

mod grapheme;

pub use grapheme::{char_len, char_to_byte, selection_bytes, snap_to_graphemes};
