//! Constant pieces of the export and preview formats.

/// Escape control byte.
pub const ESC: &str = "\x1b";

/// Opening fence of a chat `ansi` code block, including its newline.
pub const FENCE_OPEN: &str = "```ansi\n";

/// Closing fence, preceded by the newline that ends the block body.
pub const FENCE_CLOSE: &str = "\n```";

/// Reset all attributes, as written inside an export block.
pub const RESET_BARE: &str = "[0m";

/// Reset all attributes (ECMA-48 form for a real terminal).
pub const RESET: &str = "\x1b[0m";

/// SGR parameter for bold/increased intensity.
pub const BOLD: u8 = 1;

/// SGR parameter for underline.
pub const UNDERLINE: u8 = 4;
