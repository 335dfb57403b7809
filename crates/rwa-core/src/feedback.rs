//! Haptic feedback seam.
//!
//! Feedback is best effort. A device that cannot vibrate reports `false`
//! and callers carry on.

/// Something that can produce a short haptic pulse.
pub trait Haptics {
    /// Attempt a pulse of `millis` milliseconds. Returns whether it happened.
    fn vibrate(&self, millis: u32) -> bool;
}

/// Haptics for devices without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&self, _millis: u32) -> bool {
        false
    }
}
