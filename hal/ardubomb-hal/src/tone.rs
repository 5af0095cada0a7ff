//! Tone output abstraction
//!
//! A piezo transducer driven with a square wave. Implementations decide
//! how the wave is produced (PWM slice, PIO state machine, timer toggle).

/// Square-wave tone generator bound to a single output pin
pub trait ToneOutput {
    /// Start (or retune) a continuous tone at `freq_hz`
    ///
    /// A frequency of zero is equivalent to [`ToneOutput::stop_tone`].
    fn start_tone(&mut self, freq_hz: u32);

    /// Stop the tone
    fn stop_tone(&mut self);

    /// Check if a tone is currently sounding
    fn is_sounding(&self) -> bool;
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn start_tone(&mut self, freq_hz: u32) {
        (**self).start_tone(freq_hz);
    }

    fn stop_tone(&mut self) {
        (**self).stop_tone();
    }

    fn is_sounding(&self) -> bool {
        (**self).is_sounding()
    }
}
