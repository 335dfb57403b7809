//! Helpers shared by the cross-crate scenario tests.

use crossbeam_channel::Sender;
use rwa_cli::Step;
use rwa_core::ViewportSource;
use rwa_tui::{ShellApp, ShellMessage};

/// A TUI model with a fixed viewport `width` pixels wide, plus its sender.
#[must_use]
pub fn fixed_app(width: u32) -> (ShellApp, Sender<ShellMessage>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (ShellApp::new(rx, ViewportSource::Fixed(width)), tx)
}

/// Feed a scripted step to the TUI model the way the chrome would.
///
/// Resizes bypass the terminal and reclassify the context directly.
///
/// # Panics
///
/// Panics if the model's receiver is gone.
pub fn apply_to_app(app: &mut ShellApp, tx: &Sender<ShellMessage>, step: &Step) {
    let message = match step {
        Step::Navigate(route) => ShellMessage::Navigate(route.clone()),
        Step::Back => ShellMessage::Back,
        Step::Click(text) => ShellMessage::ClickText(text.clone()),
        Step::Resize(width) => {
            app.ctx.resize(*width);
            return;
        }
    };
    tx.send(message).expect("receiver alive");
    app.update();
}
