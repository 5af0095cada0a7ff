//! Piezo + LED annunciator

use ardubomb_hal::ToneOutput;
use embedded_hal::digital::{OutputPin, PinState};

use crate::traits::Annunciator;

/// Tone transducer and indicator LED switched together
///
/// On: LED high and tone at `tone_hz`. Off: LED low and tone stopped.
pub struct Beeper<T, L> {
    tone: T,
    led: L,
    tone_hz: u32,
    active: bool,
}

impl<T: ToneOutput, L: OutputPin> Beeper<T, L> {
    /// Create a beeper; both outputs are switched off
    pub fn new(tone: T, led: L, tone_hz: u32) -> Self {
        let mut beeper = Self {
            tone,
            led,
            tone_hz,
            active: true,
        };
        beeper.set_active(false);
        beeper
    }

    /// Release the underlying outputs
    pub fn release(self) -> (T, L) {
        (self.tone, self.led)
    }
}

impl<T: ToneOutput, L: OutputPin> Annunciator for Beeper<T, L> {
    fn set_active(&mut self, on: bool) {
        self.active = on;
        // LED errors are not actionable mid-tick
        self.led.set_state(PinState::from(on)).ok();
        if on {
            self.tone.start_tone(self.tone_hz);
        } else {
            self.tone.stop_tone();
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
