use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::matches_shortcut;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if matches_shortcut(&app.shortcut, key) {
        app.lock.toggle();
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            app.lock.toggle();
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (_, KeyCode::Esc)
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => request_quit(app),
        _ => {}
    }
}

/// Quit unless the lock is on; exit stays blocked while locked.
fn request_quit(app: &mut App) {
    if app.lock.is_locked() {
        let detail = format!("Press {} to disable it first.", app.shortcut);
        app.set_status("Focus Lock is on", detail);
        return;
    }
    app.should_quit = true;
}
