//! Test doubles for the collaborator traits

use core::convert::Infallible;

use ardubomb_hal::ToneOutput;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::input::Key;
use crate::scene::Peripherals;
use crate::traits::{Annunciator, CharacterDisplay, KeypadScanner, NumericDisplay, PressSensor};

/// Digital pin usable as input or output
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
}

impl MockPin {
    pub fn new(high: bool) -> Self {
        Self { high }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

#[derive(Debug, Default)]
pub struct MockTone {
    pub freq_hz: Option<u32>,
}

impl ToneOutput for MockTone {
    fn start_tone(&mut self, freq_hz: u32) {
        self.freq_hz = (freq_hz > 0).then_some(freq_hz);
    }

    fn stop_tone(&mut self) {
        self.freq_hz = None;
    }

    fn is_sounding(&self) -> bool {
        self.freq_hz.is_some()
    }
}

/// Records every actuation
#[derive(Debug, Default)]
pub struct MockAnnunciator {
    pub active: bool,
    pub calls: Vec<bool>,
}

impl Annunciator for MockAnnunciator {
    fn set_active(&mut self, on: bool) {
        self.active = on;
        self.calls.push(on);
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Character LCD emulating a 40-column DDRAM per row
#[derive(Debug)]
pub struct MockLcd {
    pub geometry: Option<(u8, u8)>,
    pub cursor: (u8, u8),
    pub screen: [[u8; 40]; 2],
    pub prints: usize,
    pub clears: usize,
}

impl Default for MockLcd {
    fn default() -> Self {
        Self {
            geometry: None,
            cursor: (0, 0),
            screen: [[0; 40]; 2],
            prints: 0,
            clears: 0,
        }
    }
}

impl MockLcd {
    /// Row contents with trailing blanks removed
    pub fn row(&self, row: usize) -> String {
        let text: String = self.screen[row]
            .iter()
            .map(|&b| if b == 0 { ' ' } else { b as char })
            .collect();
        text.trim_end().to_string()
    }
}

impl CharacterDisplay for MockLcd {
    fn begin(&mut self, columns: u8, rows: u8) {
        self.geometry = Some((columns, rows));
    }

    fn clear(&mut self) {
        self.screen = [[0; 40]; 2];
        self.cursor = (0, 0);
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor = (col, row);
    }

    fn print(&mut self, text: &str) {
        self.prints += 1;
        let (col, row) = self.cursor;
        for (i, b) in text.bytes().enumerate() {
            if let Some(cell) = self.screen[row as usize % 2].get_mut(col as usize + i) {
                *cell = b;
            }
        }
        self.cursor = (col + text.len() as u8, row);
    }
}

#[derive(Debug, Default)]
pub struct MockSegments {
    pub shown: Option<(u16, u8)>,
    pub brightness: Option<u8>,
    pub writes: usize,
}

impl NumericDisplay for MockSegments {
    fn show_value(&mut self, value: u16, flags: u8) {
        self.shown = Some((value, flags));
        self.writes += 1;
    }

    fn clear(&mut self) {
        self.shown = None;
        self.writes += 1;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Some(level);
    }
}

/// Returns `pending` once
#[derive(Debug, Default)]
pub struct MockKeypad {
    pub pending: Option<Key>,
}

impl KeypadScanner for MockKeypad {
    fn poll_key(&mut self, _now_ms: u32) -> Option<Key> {
        self.pending.take()
    }
}

#[derive(Debug, Default)]
pub struct MockPress {
    pub long: bool,
    pub ticks: usize,
    pub threshold_ms: Option<u32>,
}

impl PressSensor for MockPress {
    fn tick(&mut self, _now_ms: u32) {
        self.ticks += 1;
    }

    fn is_long_pressed(&self) -> bool {
        self.long
    }

    fn set_long_press_ms(&mut self, ms: u32) {
        self.threshold_ms = Some(ms);
    }
}

pub type MockBoard = Peripherals<MockLcd, MockSegments, MockKeypad, MockPress, MockAnnunciator>;

pub fn mock_board() -> MockBoard {
    Peripherals {
        lcd: MockLcd::default(),
        segments: MockSegments::default(),
        keypad: MockKeypad::default(),
        trigger: MockPress::default(),
        beeper: MockAnnunciator::default(),
    }
}
