//! TUI message types (Elm Messages).

use rwa_core::Route;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMessage {
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Left mouse click at a terminal cell.
    Click { column: u16, row: u16 },
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Navigate from outside the chrome (e.g. a page unit).
    Navigate(Route),
    /// Go back one page.
    Back,
    /// Click on a text element of imported markup.
    ClickText(String),
    /// Quit the application.
    Quit,
}
