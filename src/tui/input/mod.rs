mod confirm;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use crate::model::Shortcut;

use confirm::handle_confirm;
use navigate::handle_navigate;

/// Handle a key event for whatever is on screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay closes on any key
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.lock.prompt_visible() {
        handle_confirm(app, key);
    } else {
        handle_navigate(app, key);
    }
}

/// Whether `key` is the configured lock shortcut. Letter case is ignored;
/// modifiers must match exactly.
pub(super) fn matches_shortcut(shortcut: &Shortcut, key: KeyEvent) -> bool {
    let KeyCode::Char(c) = key.code else {
        return false;
    };
    c.to_ascii_lowercase() == shortcut.key
        && key.modifiers.contains(KeyModifiers::CONTROL) == shortcut.ctrl
        && key.modifiers.contains(KeyModifiers::ALT) == shortcut.alt
        && key.modifiers.contains(KeyModifiers::SHIFT) == shortcut.shift
}

#[cfg(test)]
pub(super) fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[cfg(test)]
pub(super) fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
