//! Editor session notifications.
//!
//! Event callbacks are process-global, so everything that installs one
//! lives in this single test.

use ansi_block::event::{COPIED, FORMAT_APPLIED, TEXT_CLEARED};
use ansi_block::{Color, Editor, LogLevel, set_event_callback, set_log_callback};
use std::sync::{Arc, Mutex};

#[test]
fn editor_reports_actions_through_callbacks() {
    let events: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let logs: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        sink.lock().unwrap().push((name.to_string(), data.to_string()));
    });
    let sink = Arc::clone(&logs);
    set_log_callback(move |level, msg| {
        sink.lock().unwrap().push((level, msg.to_string()));
    });

    let mut editor = Editor::new();
    editor.edit_text("status: ok");
    editor.select_color(Color::Green);
    editor.toggle_bold();
    editor.toggle_underline();
    assert!(editor.apply_to_selection(8..10));

    // Rejected selections and no-op re-applies emit nothing.
    assert!(!editor.apply_to_selection(3..3));
    assert!(!editor.apply_to_selection(8..10));

    let copied = editor.copy_text();
    assert_eq!(copied, "status: ```ansi\n[1;4;32mok[0m\n```");

    // Typing over formatted text warns that the styling is gone.
    editor.edit_text("status: down");
    // Plain text has nothing to lose.
    editor.edit_text("status: up");

    editor.clear();

    // The document logs ignored selections at debug level.
    let _ = editor.document().apply_style(0..5, editor.brush());

    let events = events.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            (
                FORMAT_APPLIED.to_string(),
                "Applied green bold underline to the selected text.".to_string()
            ),
            (COPIED.to_string(), copied.clone()),
            (
                TEXT_CLEARED.to_string(),
                "The editor has been reset.".to_string()
            ),
        ]
    );

    ansi_block::clear_event_callback();

    let logs = logs.lock().unwrap();
    assert_eq!(
        logs.as_slice(),
        &[
            (LogLevel::Warn, "raw edit discarded formatting".to_string()),
            (
                LogLevel::Debug,
                "ignoring selection 0..5 on text of 0 chars".to_string()
            ),
        ]
    );
}
