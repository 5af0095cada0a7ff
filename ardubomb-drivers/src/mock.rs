//! Recording pins and delays for driver tests

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use ardubomb_core::traits::{Annunciator, PressSensor};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Delay that returns immediately
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[derive(Debug, Default)]
pub struct BusState {
    /// Every pin write in order: (pin id, level)
    pub writes: Vec<(usize, bool)>,
    /// Current output levels
    pub levels: [bool; 8],
    /// Key held at (row, col)
    pub pressed: Option<(usize, usize)>,
}

/// Output pin writing into a shared bus log
pub struct BusPin {
    id: usize,
    bus: Rc<RefCell<BusState>>,
}

impl ErrorType for BusPin {
    type Error = Infallible;
}

impl OutputPin for BusPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut bus = self.bus.borrow_mut();
        bus.levels[self.id] = false;
        bus.writes.push((self.id, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut bus = self.bus.borrow_mut();
        bus.levels[self.id] = true;
        bus.writes.push((self.id, true));
        Ok(())
    }
}

/// Keypad column with pull-up, pulled low through a held key
/// when that key's row is driven low
pub struct ColumnPin {
    col: usize,
    bus: Rc<RefCell<BusState>>,
}

impl ErrorType for ColumnPin {
    type Error = Infallible;
}

impl InputPin for ColumnPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        let bus = self.bus.borrow();
        Ok(match bus.pressed {
            Some((row, col)) => col == self.col && !bus.levels[row],
            None => false,
        })
    }
}

fn new_bus() -> Rc<RefCell<BusState>> {
    Rc::new(RefCell::new(BusState::default()))
}

/// LCD bus: RS = 0, EN = 1, D4..D7 = 2..5
pub struct LcdBus {
    bus: Rc<RefCell<BusState>>,
}

impl LcdBus {
    pub fn new() -> Self {
        Self { bus: new_bus() }
    }

    pub fn pin(&self, id: usize) -> BusPin {
        BusPin {
            id,
            bus: self.bus.clone(),
        }
    }

    pub fn data_pins(&self) -> [BusPin; 4] {
        [self.pin(2), self.pin(3), self.pin(4), self.pin(5)]
    }

    /// Nibbles latched on each EN falling edge, with the RS level
    pub fn nibbles(&self) -> Vec<(bool, u8)> {
        let bus = self.bus.borrow();
        let mut levels = [false; 8];
        let mut latched = Vec::new();
        for &(id, level) in &bus.writes {
            if id == 1 && levels[1] && !level {
                let nibble = (0..4).fold(0u8, |n, bit| n | (u8::from(levels[2 + bit]) << bit));
                latched.push((levels[0], nibble));
            }
            levels[id] = level;
        }
        latched
    }

    /// Bytes assembled from nibble pairs, skipping `skip` leading nibbles
    pub fn bytes_after(&self, skip: usize) -> Vec<(bool, u8)> {
        self.nibbles()[skip..]
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }
}

/// Two-wire bus: CLK = 0, DIO = 1
pub struct TwoWireBus {
    bus: Rc<RefCell<BusState>>,
}

impl TwoWireBus {
    pub fn new() -> Self {
        Self { bus: new_bus() }
    }

    pub fn clk(&self) -> BusPin {
        BusPin {
            id: 0,
            bus: self.bus.clone(),
        }
    }

    pub fn dio(&self) -> BusPin {
        BusPin {
            id: 1,
            bus: self.bus.clone(),
        }
    }

    pub fn clear_log(&self) {
        self.bus.borrow_mut().writes.clear();
    }

    /// Decode start/stop framed transfers
    ///
    /// Bits are sampled on CLK rising edges, LSB first; every ninth
    /// clock is the ack slot and is dropped. Both lines idle high.
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let bus = self.bus.borrow();
        let mut levels = [true, true];
        let mut frames = Vec::new();
        let mut current: Option<(Vec<u8>, u8, usize)> = None;

        for &(id, level) in &bus.writes {
            let was = levels[id];
            levels[id] = level;
            match id {
                // DIO edge while CLK high: start or stop
                1 if levels[0] && was != level => {
                    if level {
                        if let Some((bytes, _, _)) = current.take() {
                            frames.push(bytes);
                        }
                    } else {
                        current = Some((Vec::new(), 0, 0));
                    }
                }
                0 if !was && level => {
                    if let Some((bytes, byte, bits)) = current.as_mut() {
                        if *bits < 8 {
                            *byte |= u8::from(levels[1]) << *bits;
                        }
                        *bits += 1;
                        if *bits == 9 {
                            bytes.push(*byte);
                            *byte = 0;
                            *bits = 0;
                        }
                    }
                }
                _ => {}
            }
        }
        frames
    }
}

/// Keypad matrix: rows are bus pins 0..3, columns read through the matrix
pub struct KeyMatrix {
    bus: Rc<RefCell<BusState>>,
}

impl KeyMatrix {
    pub fn new() -> Self {
        Self { bus: new_bus() }
    }

    pub fn rows(&self) -> [BusPin; 4] {
        core::array::from_fn(|id| BusPin {
            id,
            bus: self.bus.clone(),
        })
    }

    pub fn cols(&self) -> [ColumnPin; 4] {
        core::array::from_fn(|col| ColumnPin {
            col,
            bus: self.bus.clone(),
        })
    }

    pub fn hold(&self, row: usize, col: usize) {
        self.bus.borrow_mut().pressed = Some((row, col));
    }

    pub fn release(&self) {
        self.bus.borrow_mut().pressed = None;
    }

    pub fn row_levels(&self) -> [bool; 4] {
        let bus = self.bus.borrow();
        [bus.levels[0], bus.levels[1], bus.levels[2], bus.levels[3]]
    }
}

/// Trigger that is never pressed
#[derive(Default)]
pub struct IdleTrigger;

impl PressSensor for IdleTrigger {
    fn tick(&mut self, _now_ms: u32) {}

    fn is_long_pressed(&self) -> bool {
        false
    }

    fn set_long_press_ms(&mut self, _ms: u32) {}
}

/// Annunciator that only remembers its state
#[derive(Default)]
pub struct Silent {
    pub on: bool,
}

impl Annunciator for Silent {
    fn set_active(&mut self, on: bool) {
        self.on = on;
    }

    fn is_active(&self) -> bool {
        self.on
    }
}
