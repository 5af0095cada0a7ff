//! HD44780 character LCD, 4-bit parallel bus
//!
//! Write-only: R/W is tied to ground, so busy flag polling is replaced
//! by fixed delays after each command.
//!
//! # Bus
//!
//! Each byte goes out as two nibbles, high first, on D4..D7. A nibble is
//! latched on the falling edge of EN. RS selects between the
//! instruction register (low) and data register (high).

use ardubomb_core::traits::CharacterDisplay;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

/// Instruction set
pub mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    /// Entry mode: cursor moves right
    pub const ENTRY_LEFT: u8 = 0x02;
    /// Display control: display on
    pub const DISPLAY_ON: u8 = 0x04;
    /// Function set: two-line mode
    pub const TWO_LINE: u8 = 0x08;
}

/// Errors from the LCD bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// A pin write failed
    Pin(E),
}

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// HD44780 driver over six output pins
pub struct Hd44780<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
    rows: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self {
            rs,
            en,
            data,
            delay,
            rows: 2,
        }
    }

    /// Power-on initialisation into 4-bit mode
    ///
    /// The controller may be in 8-bit mode or half way through a 4-bit
    /// transfer, so it is forced to 8-bit three times before switching.
    pub fn init(&mut self, rows: u8) -> Result<(), LcdError<P::Error>> {
        self.rows = rows.clamp(1, 4);

        self.delay.delay_ms(50);
        self.rs.set_low().map_err(LcdError::Pin)?;
        self.en.set_low().map_err(LcdError::Pin)?;

        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;

        let lines = if self.rows > 1 { cmd::TWO_LINE } else { 0 };
        self.command(cmd::FUNCTION_SET | lines)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)?;
        self.clear_screen()?;
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_LEFT)
    }

    /// Clear DDRAM and home the cursor
    pub fn clear_screen(&mut self) -> Result<(), LcdError<P::Error>> {
        self.command(cmd::CLEAR_DISPLAY)?;
        self.delay.delay_us(2000);
        Ok(())
    }

    /// Move the cursor; rows beyond the configured count wrap to the last
    pub fn move_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError<P::Error>> {
        let row = row.min(self.rows - 1) as usize;
        self.command(cmd::SET_DDRAM_ADDR | col.wrapping_add(ROW_OFFSETS[row]))
    }

    /// Write ASCII text at the cursor
    pub fn write_str(&mut self, text: &str) -> Result<(), LcdError<P::Error>> {
        for byte in text.bytes() {
            self.send(byte, true)?;
        }
        Ok(())
    }

    pub fn release(self) -> (P, P, [P; 4], D) {
        (self.rs, self.en, self.data, self.delay)
    }

    fn command(&mut self, value: u8) -> Result<(), LcdError<P::Error>> {
        self.send(value, false)
    }

    fn send(&mut self, value: u8, data: bool) -> Result<(), LcdError<P::Error>> {
        self.rs
            .set_state(PinState::from(data))
            .map_err(LcdError::Pin)?;
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), LcdError<P::Error>> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::from((nibble >> bit) & 1 == 1))
                .map_err(LcdError::Pin)?;
        }
        self.pulse_enable()
    }

    fn pulse_enable(&mut self) -> Result<(), LcdError<P::Error>> {
        self.en.set_low().map_err(LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_high().map_err(LcdError::Pin)?;
        self.delay.delay_us(1);
        self.en.set_low().map_err(LcdError::Pin)?;
        // Commands need > 37us to settle
        self.delay.delay_us(100);
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> CharacterDisplay for Hd44780<P, D> {
    fn begin(&mut self, _columns: u8, rows: u8) {
        self.init(rows).ok();
    }

    fn clear(&mut self) {
        self.clear_screen().ok();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.move_cursor(col, row).ok();
    }

    fn print(&mut self, text: &str) {
        self.write_str(text).ok();
    }
}
