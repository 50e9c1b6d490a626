//! Notification and diagnostic callbacks.
//!
//! The library never prints. A front end registers one process-global
//! callback for notifications (the messages a UI would show as toasts) and
//! one for diagnostics.
//!
//! Notifications are `(name, data)` pairs:
//!
//! | name | emitted by | data |
//! |---|---|---|
//! | [`FORMAT_APPLIED`] | [`Editor::apply_to_selection`] | `"Applied <style> to the selected text."`, e.g. `"Applied red bold to the selected text."` |
//! | [`TEXT_CLEARED`] | [`Editor::clear`] | `"The editor has been reset."` |
//! | [`COPIED`] | [`Editor::copy_text`] | the exported text, exactly as returned |
//!
//! [`Editor::apply_to_selection`]: crate::Editor::apply_to_selection
//! [`Editor::clear`]: crate::Editor::clear
//! [`Editor::copy_text`]: crate::Editor::copy_text

use std::sync::{Mutex, OnceLock};

/// A selection changed style. Data: the human-readable style phrase.
pub const FORMAT_APPLIED: &str = "format_applied";
/// The editor went back to empty text. Data: a fixed reset message.
pub const TEXT_CLEARED: &str = "text_cleared";
/// Export text was produced for the clipboard. Data: that text.
pub const COPIED: &str = "copied";

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// An operation was ignored (empty or out-of-range selection).
    Debug,
    /// User-visible state was lost (formatting discarded by a raw edit).
    Warn,
}

type NotifyFn = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type DiagnosticFn = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn notify_slot() -> &'static Mutex<Option<NotifyFn>> {
    static SLOT: OnceLock<Mutex<Option<NotifyFn>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

fn diagnostic_slot() -> &'static Mutex<Option<DiagnosticFn>> {
    static SLOT: OnceLock<Mutex<Option<DiagnosticFn>>> = OnceLock::new();
    SLOT.get_or_init(|| Mutex::new(None))
}

/// Register the notification callback, replacing any previous one.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    if let Ok(mut slot) = notify_slot().lock() {
        *slot = Some(Box::new(callback));
    }
}

/// Unregister the notification callback.
pub fn clear_event_callback() {
    if let Ok(mut slot) = notify_slot().lock() {
        *slot = None;
    }
}

/// Deliver a notification. A no-op when nothing is registered.
pub fn emit_event(name: &str, data: &str) {
    if let Ok(slot) = notify_slot().lock() {
        if let Some(notify) = slot.as_ref() {
            notify(name, data);
        }
    }
}

/// Register the diagnostic callback, replacing any previous one.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut slot) = diagnostic_slot().lock() {
        *slot = Some(Box::new(callback));
    }
}

/// Deliver a diagnostic message. A no-op when nothing is registered.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(slot) = diagnostic_slot().lock() {
        if let Some(log) = slot.as_ref() {
            log(level, message);
        }
    }
}
