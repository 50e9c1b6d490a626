//! `ansi_block` — format text into a chat `ansi` code block
//!
//! # Usage
//!
//! ```bash
//! ansi_block --apply 0..5=red+bold "hello world"
//! echo "hello world" | ansi_block --apply 6..11=cyan+underline --preview
//! ```

use ansi_block::{
    ApplyMode, Color, Editor, Error, EscapeMode, ExportOptions, LogLevel, Style, set_event_callback,
    set_log_callback,
};
use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::ops::Range;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "ansi_block - format text into a chat ansi code block

USAGE:
    ansi_block [OPTIONS] [TEXT]

    TEXT is read from stdin when omitted (one trailing newline is dropped).
    Arguments after -- are taken as TEXT even if they start with a dash.

OPTIONS:
    -h, --help                  Print this help message and exit
    --apply <START>..<END>=<STYLE>
                                Apply a style to a character range; repeatable,
                                applied in order. STYLE is a color optionally
                                followed by +bold and/or +underline
    --append-mode               Use the legacy append-only placement
    --esc                       Prefix escape sequences with the ESC byte
    --preview                   Print a terminal preview instead of the export
    --events                    Report notifications on stderr
    -v, --verbose               Report diagnostics on stderr

COLORS:
    red, green, yellow, blue, magenta, cyan, white

EXAMPLES:
    ansi_block --apply 0..5=red \"hello world\"
    ansi_block --apply 0..2=blue+bold+underline --esc Hi
    ansi_block --apply 0..2=cyan -- \"-5 degrees\"
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)] // Config naturally has many boolean flags
pub struct Config {
    pub text: Option<String>,
    pub applies: Vec<(Range<usize>, Style)>,
    pub options: ExportOptions,
    pub preview: bool,
    pub events: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy();

            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,

                "--apply" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--apply requires a value".to_string()),
                    };
                    match parse_apply(&value) {
                        Ok(apply) => config.applies.push(apply),
                        Err(msg) => {
                            return ParseResult::Error(format!("Invalid --apply {value}: {msg}"));
                        }
                    }
                }

                "--append-mode" => {
                    config.options = config.options.with_apply_mode(ApplyMode::Append);
                }
                "--esc" => config.options = config.options.with_escape(EscapeMode::Esc),
                "--preview" => config.preview = true,
                "--events" => config.events = true,
                "-v" | "--verbose" => config.verbose = true,

                // End of options
                "--" => {
                    for rest in args.by_ref() {
                        if let Err(msg) = config.set_text(&rest.to_string_lossy()) {
                            return ParseResult::Error(msg);
                        }
                    }
                }

                other if other.starts_with('-') && other.len() > 1 => {
                    return ParseResult::Error(format!("Unknown option: {other}"));
                }

                other => {
                    if let Err(msg) = config.set_text(other) {
                        return ParseResult::Error(msg);
                    }
                }
            }
        }

        ParseResult::Config(config)
    }

    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.text.is_some() {
            return Err(format!("Unexpected argument: {text}"));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Parse `START..END=COLOR[+bold][+underline]`.
fn parse_apply(value: &str) -> Result<(Range<usize>, Style), String> {
    let (range, style) = value
        .split_once('=')
        .ok_or_else(|| "expected <START>..<END>=<STYLE>".to_string())?;
    let (start, end) = range
        .split_once("..")
        .ok_or_else(|| "expected <START>..<END>".to_string())?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("bad start offset {start:?}"))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("bad end offset {end:?}"))?;

    let mut parts = style.split('+');
    let color = parts
        .next()
        .unwrap_or_default()
        .parse::<Color>()
        .map_err(|e| e.to_string())?;
    let mut style = Style::new(color);
    for attr in parts {
        match attr.trim().to_lowercase().as_str() {
            "bold" => style = style.with_bold(),
            "underline" => style = style.with_underline(),
            other => return Err(format!("unknown attribute {other:?}")),
        }
    }

    Ok((start..end, style))
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => {
            if let Err(err) = run(config) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        ParseResult::Help => print!("{HELP_TEXT}"),
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn run(config: Config) -> ansi_block::Result<()> {
    if config.events {
        set_event_callback(|name, data| eprintln!("[{name}] {data}"));
    }
    if config.verbose {
        set_log_callback(|level, msg| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Warn => "warn",
            };
            eprintln!("{tag}: {msg}");
        });
    }

    let text = match config.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let mut editor = Editor::with_options(config.options);
    editor.edit_text(&text);
    for (range, style) in config.applies {
        let len = editor.document().len_chars();
        if range.start >= range.end || range.end > len {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len,
            });
        }
        editor.set_brush(style);
        editor.apply_to_selection(range);
    }

    let out = if config.preview {
        editor.preview()
    } else {
        editor.copy_text()
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
