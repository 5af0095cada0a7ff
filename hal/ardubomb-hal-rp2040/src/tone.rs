//! PIO-based tone generator
//!
//! A piezo needs a plain square wave. One PIO state machine toggles the
//! pin forever; the pitch is set entirely by the state machine's clock
//! divider, so the CPU is not involved once a tone is running.
//!
//! The program spends 32 cycles high and 32 low, which keeps the 16.8
//! divider in range from ~30 Hz up to well past audible.

use ardubomb_hal::ToneOutput;
use embassy_rp::gpio::Level;
use embassy_rp::pio::{Common, Config, Direction as PioDirection, Instance, Pin, StateMachine};
use fixed::types::U24F8;

/// System clock frequency (RP2040 default)
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// State machine cycles per output period
pub const CYCLES_PER_PERIOD: u32 = 64;

/// Lowest frequency the divider can reach
pub const MIN_TONE_HZ: u32 = SYS_CLK_HZ / (CYCLES_PER_PERIOD * 0xFFFF) + 1;

/// Highest frequency we drive a piezo with
pub const MAX_TONE_HZ: u32 = 20_000;

/// Calculate the clock divider for a tone frequency
///
/// The state machine runs at SYS_CLK / divider and completes one output
/// period every [`CYCLES_PER_PERIOD`] cycles, so
/// divider = SYS_CLK / (freq * CYCLES_PER_PERIOD).
///
/// Returns (integer_part, fractional_part) for the 16.8 fixed-point divider.
pub fn calc_clock_divider(freq_hz: u32) -> (u16, u8) {
    if freq_hz == 0 {
        return (0xFFFF, 0xFF);
    }

    let divisor = u64::from(freq_hz) * u64::from(CYCLES_PER_PERIOD);
    let divider_x256 = (u64::from(SYS_CLK_HZ) * 256) / divisor;

    let int_part = (divider_x256 / 256).clamp(1, 0xFFFF) as u16;
    let frac_part = (divider_x256 % 256) as u8;

    (int_part, frac_part)
}

/// Square-wave tone output on one PIO state machine
pub struct PioTone<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
    pin: Pin<'d, PIO>,
    freq_hz: u32,
}

impl<'d, PIO: Instance, const SM: usize> PioTone<'d, PIO, SM> {
    /// Load the toggle program and park the pin low
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Pin<'d, PIO>,
    ) -> Self {
        let prg = pio::pio_asm!(
            ".wrap_target",
            "set pins, 1 [31]",
            "set pins, 0 [31]",
            ".wrap"
        );
        let installed = common.load_program(&prg.program);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[]);
        cfg.set_set_pins(&[&pin]);
        cfg.clock_divider = U24F8::from_bits(0xFFFF_FF00);

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&pin]);
        sm.set_pins(Level::Low, &[&pin]);

        Self {
            sm,
            pin,
            freq_hz: 0,
        }
    }
}

impl<'d, PIO: Instance, const SM: usize> ToneOutput for PioTone<'d, PIO, SM> {
    fn start_tone(&mut self, freq_hz: u32) {
        if freq_hz == 0 {
            self.stop_tone();
            return;
        }

        let freq = freq_hz.clamp(MIN_TONE_HZ, MAX_TONE_HZ);
        let (int_div, frac_div) = calc_clock_divider(freq);
        let divider_bits = (u32::from(int_div) << 8) | u32::from(frac_div);
        self.sm.set_clock_divider(U24F8::from_bits(divider_bits));
        self.sm.clkdiv_restart();

        if self.freq_hz == 0 {
            self.sm.set_enable(true);
        }
        self.freq_hz = freq;
    }

    fn stop_tone(&mut self) {
        self.sm.set_enable(false);
        // Leave the transducer unbiased
        self.sm.set_pins(Level::Low, &[&self.pin]);
        self.freq_hz = 0;
    }

    fn is_sounding(&self) -> bool {
        self.freq_hz != 0
    }
}
