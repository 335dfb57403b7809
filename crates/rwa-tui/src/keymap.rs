//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Back,
    /// Move focus between the chrome and the page content.
    ToggleFocus,
    Prev,
    Next,
    Activate,
    /// Jump to the primary item at this index.
    Jump(usize),
    ToggleMenu,
    ToggleSearch,
    ToggleSidebar,
    /// Close whatever overlay is open.
    Dismiss,
    /// Printable input for the search field.
    Input(char),
    /// Delete the last search character.
    Erase,
    None,
}

/// Map a key event to an action.
///
/// While the search field is visible printable keys go into it.
#[must_use]
pub fn map_key(key: KeyEvent, search_active: bool) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    if search_active {
        match key.code {
            KeyCode::Char(c) => return KeyAction::Input(c),
            KeyCode::Backspace => return KeyAction::Erase,
            KeyCode::Esc => return KeyAction::Dismiss,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Dismiss,
        KeyCode::Backspace | KeyCode::Char('b') => KeyAction::Back,
        KeyCode::Tab | KeyCode::BackTab => KeyAction::ToggleFocus,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => KeyAction::Prev,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => KeyAction::Next,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
        KeyCode::Char(c @ '1'..='5') => KeyAction::Jump(c as usize - '1' as usize),
        KeyCode::Char('m') => KeyAction::ToggleMenu,
        KeyCode::Char('/') => KeyAction::ToggleSearch,
        KeyCode::Char('c') => KeyAction::ToggleSidebar,
        _ => KeyAction::None,
    }
}

/// Key hints shown in the footer.
#[must_use]
pub fn key_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q", "quit"),
        ("⌫", "back"),
        ("tab", "focus"),
        ("↑↓", "move"),
        ("enter", "open"),
        ("1-5", "jump"),
        ("c", "collapse"),
    ]
}
