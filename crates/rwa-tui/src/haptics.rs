//! Terminal bell as haptic feedback.

use std::io::{self, Write};

use rwa_core::Haptics;

/// Rings the terminal bell in place of a vibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn vibrate(&self, _millis: u32) -> bool {
        let mut stdout = io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .is_ok()
    }
}
