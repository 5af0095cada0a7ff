//! TM1637 four digit LED driver
//!
//! Two-wire serial bus resembling I2C without addressing: a start
//! condition, bytes LSB first with an ack clock after each, then a stop
//! condition. The chip's ack is clocked but not checked, since the data
//! line may be a push-pull output.

use ardubomb_core::traits::NumericDisplay;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

/// Data command: write, auto-increment address
const CMD_DATA: u8 = 0x40;
/// Address command, digit 0
const CMD_ADDRESS: u8 = 0xC0;
/// Display control command
const CMD_DISPLAY: u8 = 0x80;
/// Display control: display on
const DISPLAY_ON: u8 = 0x08;

/// Half-period of the bus clock
const BIT_DELAY_US: u32 = 100;

/// Number of digits
pub const DIGITS: usize = 4;

/// Segment patterns for hex digits (bit 0 = segment A, bit 7 = dot/colon)
const SEGMENTS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, // 0-7
    0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, // 8-F
];

/// Segment pattern for a hex digit
pub const fn encode_digit(digit: u8) -> u8 {
    SEGMENTS[(digit & 0x0F) as usize]
}

/// Errors from the display bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1637Error<E> {
    /// A pin write failed
    Pin(E),
}

/// TM1637 driver
pub struct Tm1637<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    /// Display control bits: on flag + brightness
    control: u8,
}

impl<CLK, DIO, D, E> Tm1637<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
{
    /// Create the driver; both lines are released high
    pub fn new(mut clk: CLK, mut dio: DIO, delay: D) -> Self {
        clk.set_high().ok();
        dio.set_high().ok();
        Self {
            clk,
            dio,
            delay,
            control: DISPLAY_ON | 0x07,
        }
    }

    /// Brightness level 0-7, applied with the next write
    pub fn brightness(&mut self, level: u8) {
        self.control = DISPLAY_ON | (level & 0x07);
    }

    /// Current display control byte
    pub fn control(&self) -> u8 {
        CMD_DISPLAY | self.control
    }

    /// Write raw segment patterns starting at digit 0
    pub fn write_segments(&mut self, segments: &[u8; DIGITS]) -> Result<(), Tm1637Error<E>> {
        self.start()?;
        self.write_byte(CMD_DATA)?;
        self.stop()?;

        self.start()?;
        self.write_byte(CMD_ADDRESS)?;
        for &segment in segments {
            self.write_byte(segment)?;
        }
        self.stop()?;

        self.start()?;
        self.write_byte(CMD_DISPLAY | self.control)?;
        self.stop()
    }

    /// Show a decimal number with leading zeros
    ///
    /// `dots` is applied from the most significant digit: bit 7 lights
    /// the dot of digit 0, bit 6 the dot of digit 1 (the colon), and so
    /// on. Values above 9999 show their low four digits.
    pub fn show_number(&mut self, value: u16, dots: u8) -> Result<(), Tm1637Error<E>> {
        self.write_segments(&number_segments(value, dots))
    }

    /// Blank all digits
    pub fn blank(&mut self) -> Result<(), Tm1637Error<E>> {
        self.write_segments(&[0; DIGITS])
    }

    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }

    fn bit_delay(&mut self) {
        self.delay.delay_us(BIT_DELAY_US);
    }

    fn start(&mut self) -> Result<(), Tm1637Error<E>> {
        self.dio.set_low().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Tm1637Error<E>> {
        self.dio.set_low().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        self.clk.set_high().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        self.dio.set_high().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Tm1637Error<E>> {
        for bit in 0..8 {
            self.clk.set_low().map_err(Tm1637Error::Pin)?;
            self.bit_delay();
            self.dio
                .set_state(PinState::from((byte >> bit) & 1 == 1))
                .map_err(Tm1637Error::Pin)?;
            self.bit_delay();
            self.clk.set_high().map_err(Tm1637Error::Pin)?;
            self.bit_delay();
        }

        // Ack slot: release DIO and clock once
        self.clk.set_low().map_err(Tm1637Error::Pin)?;
        self.dio.set_high().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        self.clk.set_high().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        self.clk.set_low().map_err(Tm1637Error::Pin)?;
        self.bit_delay();
        Ok(())
    }
}

/// Segment patterns for a zero-padded decimal value with dot flags
pub fn number_segments(value: u16, dots: u8) -> [u8; DIGITS] {
    let mut segments = [0u8; DIGITS];
    let mut rest = value;
    for segment in segments.iter_mut().rev() {
        *segment = encode_digit((rest % 10) as u8);
        rest /= 10;
    }
    for (i, segment) in segments.iter_mut().enumerate() {
        *segment |= (dots << i) & 0x80;
    }
    segments
}

impl<CLK, DIO, D, E> NumericDisplay for Tm1637<CLK, DIO, D>
where
    CLK: OutputPin<Error = E>,
    DIO: OutputPin<Error = E>,
    D: DelayNs,
{
    fn show_value(&mut self, value: u16, flags: u8) {
        self.show_number(value, flags).ok();
    }

    fn clear(&mut self) {
        self.blank().ok();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{NoDelay, TwoWireBus};
    use ardubomb_core::traits::DOTS;

    #[test]
    fn test_digit_encoding() {
        assert_eq!(encode_digit(0), 0x3F);
        assert_eq!(encode_digit(8), 0x7F);
        assert_eq!(encode_digit(0xA), 0x77);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(
            number_segments(7, 0),
            [0x3F, 0x3F, 0x3F, encode_digit(7)]
        );
        assert_eq!(
            number_segments(1234, 0),
            [encode_digit(1), encode_digit(2), encode_digit(3), encode_digit(4)]
        );
    }

    #[test]
    fn test_colon_flag_lights_second_digit() {
        let segments = number_segments(159, DOTS);
        assert_eq!(segments[0], encode_digit(0));
        assert_eq!(segments[1], encode_digit(1) | 0x80);
        assert_eq!(segments[2], encode_digit(5));
        assert_eq!(segments[3], encode_digit(9));
    }

    #[test]
    fn test_large_values_truncate() {
        assert_eq!(number_segments(12345, 0), number_segments(2345, 0));
    }

    #[test]
    fn test_show_value_frames() {
        let bus = TwoWireBus::new();
        let mut display = Tm1637::new(bus.clk(), bus.dio(), NoDelay);
        display.set_brightness(2);
        bus.clear_log();

        display.show_value(42, DOTS);

        let mut expected = vec![CMD_ADDRESS];
        expected.extend_from_slice(&number_segments(42, DOTS));
        assert_eq!(
            bus.frames(),
            vec![vec![CMD_DATA], expected, vec![0x8A]]
        );
    }

    #[test]
    fn test_clear_writes_blank_digits() {
        let bus = TwoWireBus::new();
        let mut display = Tm1637::new(bus.clk(), bus.dio(), NoDelay);
        bus.clear_log();

        NumericDisplay::clear(&mut display);

        let frames = bus.frames();
        assert_eq!(frames[1], vec![CMD_ADDRESS, 0, 0, 0, 0]);
        assert_eq!(frames[2], vec![0x8F]);
    }

    #[test]
    fn test_brightness_masked() {
        let bus = TwoWireBus::new();
        let mut display = Tm1637::new(bus.clk(), bus.dio(), NoDelay);
        display.set_brightness(0xFF);
        assert_eq!(display.control(), 0x8F);
        display.set_brightness(0);
        assert_eq!(display.control(), 0x88);
    }
}
