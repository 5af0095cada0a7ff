//! Hardware configuration types
//!
//! Pin wiring for the prop's peripherals. Numbers are GPIO indices on
//! the target MCU (0-29 for RP2040).

/// Number of keypad rows
pub const KEYPAD_ROWS: usize = 4;

/// Number of keypad columns
pub const KEYPAD_COLS: usize = 4;

/// Highest valid GPIO number + 1
pub const GPIO_COUNT: u8 = 30;

/// HD44780 character LCD in 4-bit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdPins {
    /// Register select
    pub rs: u8,
    /// Enable strobe
    pub en: u8,
    /// Data lines D4..D7
    pub data: [u8; 4],
}

/// TM1637 two-wire clock display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPins {
    /// Clock line
    pub clk: u8,
    /// Data line (open drain, external pull-up)
    pub dio: u8,
}

/// Matrix keypad
///
/// Rows are driven low one at a time; columns are inputs with pull-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeypadPins {
    pub rows: [u8; KEYPAD_ROWS],
    pub cols: [u8; KEYPAD_COLS],
}

/// Complete pin assignment for one board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignments {
    pub lcd: LcdPins,
    pub segments: SegmentPins,
    pub keypad: KeypadPins,
    /// Tilt/press button, active low with pull-up
    pub trigger: u8,
    /// Piezo transducer
    pub beeper: u8,
    /// Indicator LED, active high
    pub led: u8,
}

impl PinAssignments {
    /// Reference wiring on a Raspberry Pi Pico
    pub const PICO: Self = Self {
        lcd: LcdPins {
            rs: 0,
            en: 1,
            data: [2, 3, 4, 5],
        },
        segments: SegmentPins { clk: 6, dio: 7 },
        keypad: KeypadPins {
            rows: [10, 11, 12, 13],
            cols: [18, 19, 20, 21],
        },
        trigger: 14,
        beeper: 15,
        led: 25,
    };

    /// Total number of pins used
    pub const PIN_COUNT: usize = 2 + 4 + 2 + KEYPAD_ROWS + KEYPAD_COLS + 3;

    /// All assigned pins in a fixed order
    pub const fn all(&self) -> [u8; Self::PIN_COUNT] {
        let k = &self.keypad;
        [
            self.lcd.rs,
            self.lcd.en,
            self.lcd.data[0],
            self.lcd.data[1],
            self.lcd.data[2],
            self.lcd.data[3],
            self.segments.clk,
            self.segments.dio,
            k.rows[0],
            k.rows[1],
            k.rows[2],
            k.rows[3],
            k.cols[0],
            k.cols[1],
            k.cols[2],
            k.cols[3],
            self.trigger,
            self.beeper,
            self.led,
        ]
    }

    /// Check that every pin is in range and used only once
    pub const fn is_valid(&self) -> bool {
        let pins = self.all();
        let mut i = 0;
        while i < pins.len() {
            if pins[i] >= GPIO_COUNT {
                return false;
            }
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i] == pins[j] {
                    return false;
                }
                j += 1;
            }
            i += 1;
        }
        true
    }
}

const _: () = assert!(PinAssignments::PICO.is_valid());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pico_wiring_is_valid() {
        assert!(PinAssignments::PICO.is_valid());
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut pins = PinAssignments::PICO;
        pins.led = pins.beeper;
        assert!(!pins.is_valid());
    }

    #[test]
    fn test_out_of_range_pin_rejected() {
        let mut pins = PinAssignments::PICO;
        pins.keypad.cols[3] = 30;
        assert!(!pins.is_valid());
    }
}
