//! # rwa-tui
//!
//! Responsive terminal chrome for the RWA dashboard using ratatui with Elm
//! architecture. Mobile viewports get a header, bottom navigation and a menu
//! overlay; tablet and desktop viewports get a sidebar and a footer.

pub mod bottom_nav;
pub mod footer;
pub mod haptics;
pub mod header;
pub mod keymap;
pub mod menu;
pub mod messages;
pub mod model;
pub mod pages;
pub mod sidebar;
pub mod styles;

pub use haptics::TerminalBell;
pub use keymap::KeyAction;
pub use messages::ShellMessage;
pub use model::{Focus, ShellApp, ShellLayout};
pub use styles::ColorTheme;
