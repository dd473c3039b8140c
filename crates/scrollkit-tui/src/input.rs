use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    /// Scroll to the selected section
    Select,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    CycleEasing,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Outline navigation
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Scroll to the selected section
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Select,

        // Cycle the active easing curve
        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::CycleEasing,

        _ => Action::None,
    }
}
