//! Keybindings of the browser screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Interrupt,
    PrevPage,
    NextPage,
    RowUp,
    RowDown,
    FirstRow,
    LastRow,
}

/// Footer help, in display order.
pub const HELP: &[(&str, &str)] = &[
    ("q", "Quit"),
    ("h/←", "Previous"),
    ("l/→", "Next"),
    ("j/k", "Row"),
    ("g/G", "First/Last row"),
];

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Interrupt),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::RowUp),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::RowDown),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),
        _ => None,
    }
}
