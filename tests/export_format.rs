//! Export format tests.
//!
//! The fenced text is what gets pasted into the chat client, so these pin
//! it byte-for-byte. Snapshots use the `Debug` form to keep control bytes
//! and newlines visible on one line.

use ansi_block::{
    ApplyMode, Color, Document, EscapeMode, Style, apply_style, flatten_plain_text,
    reset_to_plain_text, serialize_ansi,
};
use std::sync::Once;
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Single segment
// ============================================================================

#[test]
fn full_range_red() {
    setup_test_logging();
    let doc = apply_style(&reset_to_plain_text("hello"), 0..5, Style::new(Color::Red));
    let out = serialize_ansi(&doc);
    info!(?out, "serialized");
    assert_eq!(out, "```ansi\n[31mhello[0m\n```");
}

#[test]
fn full_range_blue_bold_underline() {
    setup_test_logging();
    let style = Style::from_flags(Color::Blue, true, true);
    let doc = apply_style(&reset_to_plain_text("Hi"), 0..2, style);
    insta::assert_snapshot!(format!("{:?}", serialize_ansi(&doc)), @r#""```ansi\n[1;4;34mHi[0m\n```""#);
}

#[test]
fn every_palette_entry() {
    setup_test_logging();
    for color in Color::ALL {
        let doc = Document::from_plain("x").apply_style(0..1, Style::new(color));
        let expected = format!("```ansi\n[{}mx[0m\n```", color.code());
        debug!(%color, "checking");
        assert_eq!(doc.to_ansi(), expected);
    }
}

#[test]
fn bold_only_and_underline_only() {
    let doc = Document::from_plain("ab")
        .apply_style(0..1, Style::new(Color::Yellow).with_bold())
        .apply_style(1..2, Style::new(Color::Yellow).with_underline());
    insta::assert_snapshot!(
        format!("{:?}", doc.to_ansi()),
        @r#""```ansi\n[1;33ma[0m\n``````ansi\n[4;33mb[0m\n```""#
    );
}

// ============================================================================
// Mixed documents
// ============================================================================

#[test]
fn plain_text_surrounds_blocks() {
    let doc = Document::from_plain("say hello now").apply_style(4..9, Style::new(Color::Green));
    insta::assert_snapshot!(
        format!("{:?}", doc.to_ansi()),
        @r#""say ```ansi\n[32mhello[0m\n``` now""#
    );
}

#[test]
fn unformatted_document_exports_verbatim() {
    let doc = reset_to_plain_text("line one\nline two");
    assert_eq!(serialize_ansi(&doc), "line one\nline two");
    assert_eq!(serialize_ansi(&reset_to_plain_text("")), "");
}

#[test]
fn adjacent_equal_styles_share_one_block() {
    let red = Style::new(Color::Red);
    let doc = Document::from_plain("abcd")
        .apply_style(0..2, red)
        .apply_style(2..4, red);
    assert_eq!(doc.to_ansi(), "```ansi\n[31mabcd[0m\n```");
}

#[test]
fn append_mode_keeps_separate_blocks() {
    let red = Style::new(Color::Red);
    let doc = Document::from_plain("abcd")
        .apply_style_with_mode(0..2, red, ApplyMode::Append)
        .apply_style_with_mode(2..4, red, ApplyMode::Append);
    insta::assert_snapshot!(
        format!("{:?}", doc.to_ansi()),
        @r#""```ansi\n[31mab[0m\n```cd```ansi\n[31mcd[0m\n```""#
    );
    assert_eq!(flatten_plain_text(&doc), "abcdcd");
}

#[test]
fn multibyte_text_is_sliced_on_characters() {
    let doc = Document::from_plain("naïve 中文").apply_style(6..8, Style::new(Color::Magenta));
    assert_eq!(doc.to_ansi(), "naïve ```ansi\n[35m中文[0m\n```");
}

// ============================================================================
// Escape modes
// ============================================================================

#[test]
fn esc_mode_prefixes_every_sequence() {
    let doc = Document::from_plain("go stop")
        .apply_style(0..2, Style::new(Color::Green))
        .apply_style(3..7, Style::new(Color::Red).with_bold());
    insta::assert_snapshot!(
        format!("{:?}", doc.to_ansi_with_mode(EscapeMode::Esc)),
        @r#""```ansi\n\u{1b}[32mgo\u{1b}[0m\n``` ```ansi\n\u{1b}[1;31mstop\u{1b}[0m\n```""#
    );
}

#[test]
fn esc_mode_is_bare_mode_plus_control_bytes() {
    let doc = Document::from_plain("one two three")
        .apply_style(0..3, Style::new(Color::Cyan).with_underline())
        .apply_style(8..13, Style::new(Color::White));
    let bare = doc.to_ansi();
    let esc = doc.to_ansi_with_mode(EscapeMode::Esc);
    assert_eq!(esc.replace('\x1b', ""), bare);
    assert_eq!(esc.matches('\x1b').count(), 4);
}
