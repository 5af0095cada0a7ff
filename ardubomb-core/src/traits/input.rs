//! Input traits

use crate::input::Key;

/// Non-blocking keypad
pub trait KeypadScanner {
    /// Return a newly pressed key, if any
    ///
    /// `None` means no new key this call; it is not an error.
    fn poll_key(&mut self, now_ms: u32) -> Option<Key>;
}

/// Polled push/tilt button with long-press detection
pub trait PressSensor {
    /// Advance the detector; call once per loop iteration
    fn tick(&mut self, now_ms: u32);

    /// Held continuously for at least the long-press threshold
    fn is_long_pressed(&self) -> bool;

    /// Change the long-press threshold
    fn set_long_press_ms(&mut self, ms: u32);
}
