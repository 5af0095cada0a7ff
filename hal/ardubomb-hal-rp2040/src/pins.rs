//! Pin allocation by number
//!
//! Pin numbers come from the build configuration, not from the code, so
//! pins are handed out at runtime from a bank indexed by GPIO number.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals;
use embassy_rp::pio::{Common, Instance, Pin as PioPinHandle};
use embassy_rp::{Peri, Peripherals};

/// Number of user GPIOs
pub const GPIO_COUNT: u8 = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Bank of GPIO pins taken by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl PinBank {
    /// Move every pin still present in `p` into the bank
    ///
    /// Pins already taken out of `p` (for example as PIO pins) stay
    /// unavailable.
    pub fn new(p: &mut PinBankPeripherals) -> Self {
        Self {
            pins: [
                p.pin0.take().map(Into::into),
                p.pin1.take().map(Into::into),
                p.pin2.take().map(Into::into),
                p.pin3.take().map(Into::into),
                p.pin4.take().map(Into::into),
                p.pin5.take().map(Into::into),
                p.pin6.take().map(Into::into),
                p.pin7.take().map(Into::into),
                p.pin8.take().map(Into::into),
                p.pin9.take().map(Into::into),
                p.pin10.take().map(Into::into),
                p.pin11.take().map(Into::into),
                p.pin12.take().map(Into::into),
                p.pin13.take().map(Into::into),
                p.pin14.take().map(Into::into),
                p.pin15.take().map(Into::into),
                p.pin16.take().map(Into::into),
                p.pin17.take().map(Into::into),
                p.pin18.take().map(Into::into),
                p.pin19.take().map(Into::into),
                p.pin20.take().map(Into::into),
                p.pin21.take().map(Into::into),
                p.pin22.take().map(Into::into),
                p.pin23.take().map(Into::into),
                p.pin24.take().map(Into::into),
                p.pin25.take().map(Into::into),
                p.pin26.take().map(Into::into),
                p.pin27.take().map(Into::into),
                p.pin28.take().map(Into::into),
                p.pin29.take().map(Into::into),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}

/// GPIO pins before they go into a [`PinBank`]
///
/// Using Option allows taking individual pins with their concrete type
/// first, which the PIO needs.
pub struct PinBankPeripherals {
    pub pin0: Option<Peri<'static, peripherals::PIN_0>>,
    pub pin1: Option<Peri<'static, peripherals::PIN_1>>,
    pub pin2: Option<Peri<'static, peripherals::PIN_2>>,
    pub pin3: Option<Peri<'static, peripherals::PIN_3>>,
    pub pin4: Option<Peri<'static, peripherals::PIN_4>>,
    pub pin5: Option<Peri<'static, peripherals::PIN_5>>,
    pub pin6: Option<Peri<'static, peripherals::PIN_6>>,
    pub pin7: Option<Peri<'static, peripherals::PIN_7>>,
    pub pin8: Option<Peri<'static, peripherals::PIN_8>>,
    pub pin9: Option<Peri<'static, peripherals::PIN_9>>,
    pub pin10: Option<Peri<'static, peripherals::PIN_10>>,
    pub pin11: Option<Peri<'static, peripherals::PIN_11>>,
    pub pin12: Option<Peri<'static, peripherals::PIN_12>>,
    pub pin13: Option<Peri<'static, peripherals::PIN_13>>,
    pub pin14: Option<Peri<'static, peripherals::PIN_14>>,
    pub pin15: Option<Peri<'static, peripherals::PIN_15>>,
    pub pin16: Option<Peri<'static, peripherals::PIN_16>>,
    pub pin17: Option<Peri<'static, peripherals::PIN_17>>,
    pub pin18: Option<Peri<'static, peripherals::PIN_18>>,
    pub pin19: Option<Peri<'static, peripherals::PIN_19>>,
    pub pin20: Option<Peri<'static, peripherals::PIN_20>>,
    pub pin21: Option<Peri<'static, peripherals::PIN_21>>,
    pub pin22: Option<Peri<'static, peripherals::PIN_22>>,
    pub pin23: Option<Peri<'static, peripherals::PIN_23>>,
    pub pin24: Option<Peri<'static, peripherals::PIN_24>>,
    pub pin25: Option<Peri<'static, peripherals::PIN_25>>,
    pub pin26: Option<Peri<'static, peripherals::PIN_26>>,
    pub pin27: Option<Peri<'static, peripherals::PIN_27>>,
    pub pin28: Option<Peri<'static, peripherals::PIN_28>>,
    pub pin29: Option<Peri<'static, peripherals::PIN_29>>,
}

impl PinBankPeripherals {
    /// Split Embassy peripherals into GPIOs and the rest
    pub fn from_peripherals(p: Peripherals) -> (Self, RemainingPeripherals) {
        let pins = Self {
            pin0: Some(p.PIN_0),
            pin1: Some(p.PIN_1),
            pin2: Some(p.PIN_2),
            pin3: Some(p.PIN_3),
            pin4: Some(p.PIN_4),
            pin5: Some(p.PIN_5),
            pin6: Some(p.PIN_6),
            pin7: Some(p.PIN_7),
            pin8: Some(p.PIN_8),
            pin9: Some(p.PIN_9),
            pin10: Some(p.PIN_10),
            pin11: Some(p.PIN_11),
            pin12: Some(p.PIN_12),
            pin13: Some(p.PIN_13),
            pin14: Some(p.PIN_14),
            pin15: Some(p.PIN_15),
            pin16: Some(p.PIN_16),
            pin17: Some(p.PIN_17),
            pin18: Some(p.PIN_18),
            pin19: Some(p.PIN_19),
            pin20: Some(p.PIN_20),
            pin21: Some(p.PIN_21),
            pin22: Some(p.PIN_22),
            pin23: Some(p.PIN_23),
            pin24: Some(p.PIN_24),
            pin25: Some(p.PIN_25),
            pin26: Some(p.PIN_26),
            pin27: Some(p.PIN_27),
            pin28: Some(p.PIN_28),
            pin29: Some(p.PIN_29),
        };
        let remaining = RemainingPeripherals { pio0: p.PIO0 };
        (pins, remaining)
    }

    /// Take a pin by number and hand it to a PIO block
    pub fn take_pio_pin<'d, PIO: Instance>(
        &mut self,
        pin_num: u8,
        common: &mut Common<'d, PIO>,
    ) -> Result<PioPinHandle<'d, PIO>, PinError> {
        let pin = match pin_num {
            0 => self.pin0.take().map(|pin| common.make_pio_pin(pin)),
            1 => self.pin1.take().map(|pin| common.make_pio_pin(pin)),
            2 => self.pin2.take().map(|pin| common.make_pio_pin(pin)),
            3 => self.pin3.take().map(|pin| common.make_pio_pin(pin)),
            4 => self.pin4.take().map(|pin| common.make_pio_pin(pin)),
            5 => self.pin5.take().map(|pin| common.make_pio_pin(pin)),
            6 => self.pin6.take().map(|pin| common.make_pio_pin(pin)),
            7 => self.pin7.take().map(|pin| common.make_pio_pin(pin)),
            8 => self.pin8.take().map(|pin| common.make_pio_pin(pin)),
            9 => self.pin9.take().map(|pin| common.make_pio_pin(pin)),
            10 => self.pin10.take().map(|pin| common.make_pio_pin(pin)),
            11 => self.pin11.take().map(|pin| common.make_pio_pin(pin)),
            12 => self.pin12.take().map(|pin| common.make_pio_pin(pin)),
            13 => self.pin13.take().map(|pin| common.make_pio_pin(pin)),
            14 => self.pin14.take().map(|pin| common.make_pio_pin(pin)),
            15 => self.pin15.take().map(|pin| common.make_pio_pin(pin)),
            16 => self.pin16.take().map(|pin| common.make_pio_pin(pin)),
            17 => self.pin17.take().map(|pin| common.make_pio_pin(pin)),
            18 => self.pin18.take().map(|pin| common.make_pio_pin(pin)),
            19 => self.pin19.take().map(|pin| common.make_pio_pin(pin)),
            20 => self.pin20.take().map(|pin| common.make_pio_pin(pin)),
            21 => self.pin21.take().map(|pin| common.make_pio_pin(pin)),
            22 => self.pin22.take().map(|pin| common.make_pio_pin(pin)),
            23 => self.pin23.take().map(|pin| common.make_pio_pin(pin)),
            24 => self.pin24.take().map(|pin| common.make_pio_pin(pin)),
            25 => self.pin25.take().map(|pin| common.make_pio_pin(pin)),
            26 => self.pin26.take().map(|pin| common.make_pio_pin(pin)),
            27 => self.pin27.take().map(|pin| common.make_pio_pin(pin)),
            28 => self.pin28.take().map(|pin| common.make_pio_pin(pin)),
            29 => self.pin29.take().map(|pin| common.make_pio_pin(pin)),
            _ => return Err(PinError::InvalidPin),
        };
        pin.ok_or(PinError::AlreadyTaken)
    }
}

/// Non-GPIO peripherals the firmware uses
pub struct RemainingPeripherals {
    pub pio0: Peri<'static, peripherals::PIO0>,
}
