//! Debounced push button with long-press detection
//!
//! Polled once per loop iteration. The input is active low (pull-up,
//! switch to ground). A long press is reported once the debounced
//! press has lasted the configured threshold and stays reported until
//! release.

use ardubomb_hal::elapsed_ms;
use embedded_hal::digital::InputPin;

use crate::config::DEFAULT_LONG_PRESS_MS;
use crate::traits::PressSensor;

/// Minimum time between accepted level changes
pub const DEBOUNCE_MS: u32 = 50;

/// Press detector over an active-low input pin
pub struct PressDetector<P> {
    pin: P,
    long_press_ms: u32,
    /// Debounced state
    pressed: bool,
    last_change_ms: Option<u32>,
    pressed_since_ms: u32,
    long_pressed: bool,
}

impl<P: InputPin> PressDetector<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            pressed: false,
            last_change_ms: None,
            pressed_since_ms: 0,
            long_pressed: false,
        }
    }

    /// Debounced press state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn release(self) -> P {
        self.pin
    }

    fn accept_change(&self, now_ms: u32) -> bool {
        match self.last_change_ms {
            Some(last) => elapsed_ms(now_ms, last) >= DEBOUNCE_MS,
            None => true,
        }
    }
}

impl<P: InputPin> PressSensor for PressDetector<P> {
    fn tick(&mut self, now_ms: u32) {
        // A pin read error reads as released
        let raw = self.pin.is_low().unwrap_or(false);

        if raw != self.pressed && self.accept_change(now_ms) {
            self.pressed = raw;
            self.last_change_ms = Some(now_ms);
            if raw {
                self.pressed_since_ms = now_ms;
            } else {
                self.long_pressed = false;
            }
        }

        if self.pressed
            && !self.long_pressed
            && elapsed_ms(now_ms, self.pressed_since_ms) >= self.long_press_ms
        {
            self.long_pressed = true;
        }
    }

    fn is_long_pressed(&self) -> bool {
        self.long_pressed
    }

    fn set_long_press_ms(&mut self, ms: u32) {
        self.long_press_ms = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    fn detector() -> PressDetector<MockPin> {
        // Released: pulled high
        PressDetector::new(MockPin::new(true))
    }

    #[test]
    fn test_idle_is_released() {
        let mut press = detector();
        press.tick(0);
        press.tick(5_000);
        assert!(!press.is_pressed());
        assert!(!press.is_long_pressed());
    }

    #[test]
    fn test_long_press_after_threshold() {
        let mut press = detector();
        press.set_long_press_ms(2000);

        press.pin.high = false;
        press.tick(100);
        assert!(press.is_pressed());

        press.tick(2_099);
        assert!(!press.is_long_pressed());
        press.tick(2_100);
        assert!(press.is_long_pressed());
        press.tick(4_000);
        assert!(press.is_long_pressed());
    }

    #[test]
    fn test_release_resets_long_press() {
        let mut press = detector();
        press.set_long_press_ms(500);

        press.pin.high = false;
        press.tick(0);
        press.tick(600);
        assert!(press.is_long_pressed());

        press.pin.high = true;
        press.tick(700);
        assert!(!press.is_pressed());
        assert!(!press.is_long_pressed());
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut press = detector();
        press.set_long_press_ms(1000);

        press.pin.high = false;
        press.tick(0);
        // Contact bounce inside the debounce window
        press.pin.high = true;
        press.tick(10);
        press.pin.high = false;
        press.tick(20);
        assert!(press.is_pressed());

        press.tick(1_000);
        assert!(press.is_long_pressed());
    }

    #[test]
    fn test_short_press_is_not_long() {
        let mut press = detector();

        press.pin.high = false;
        press.tick(0);
        press.pin.high = true;
        press.tick(300);
        press.tick(DEFAULT_LONG_PRESS_MS + 100);
        assert!(!press.is_long_pressed());
    }
}
