use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys while the enable prompt is open. Everything else is ignored,
/// including the shortcut itself.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y' | 'Y'))
        | (_, KeyCode::Enter) => {
            app.lock.confirm();
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('n' | 'N')) | (_, KeyCode::Esc) => {
            app.lock.cancel();
        }
        _ => {}
    }
}
