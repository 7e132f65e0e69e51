//! Key mapping from terminal events to app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::AppAction;

/// Map a key press to an app action.
///
/// Only presses count; release and auto-repeat events map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<AppAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    should_quit(key).then_some(AppAction::Quit)
}

/// Check if key should quit the app: Escape, `q`, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
