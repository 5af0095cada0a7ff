//! Peripheral setup from the pin configuration

use ardubomb_core::beep::Beeper;
use ardubomb_core::config::PinAssignments;
use ardubomb_core::input::PressDetector;
use ardubomb_core::scene::Peripherals;
use ardubomb_drivers::keypad::MatrixKeypad;
use ardubomb_drivers::lcd::Hd44780;
use ardubomb_drivers::segment::Tm1637;
use ardubomb_hal_rp2040::{PinBank, PinBankPeripherals, PinError, PioTone};
use embassy_rp::gpio::{Input, Level, Output, OutputOpenDrain, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{Common, Pio};
use embassy_time::Delay;

use crate::Irqs;

pub type Lcd = Hd44780<Output<'static>, Delay>;
pub type Segments = Tm1637<Output<'static>, OutputOpenDrain<'static>, Delay>;
pub type Keypad = MatrixKeypad<Output<'static>, Input<'static>>;
pub type Trigger = PressDetector<Input<'static>>;
pub type Buzzer = Beeper<PioTone<'static, PIO0, 0>, Output<'static>>;

pub type Board = Peripherals<Lcd, Segments, Keypad, Trigger, Buzzer>;

/// Everything the scene controller drives, plus the PIO block that
/// must outlive the tone generator
pub struct Hardware {
    pub board: Board,
    pub pio: Common<'static, PIO0>,
}

/// Claim and configure every peripheral named in `pins`
pub fn init(
    p: embassy_rp::Peripherals,
    pins: &PinAssignments,
    tone_hz: u32,
) -> Result<Hardware, PinError> {
    let (mut gpio, remaining) = PinBankPeripherals::from_peripherals(p);

    // The tone pin is handed to the PIO before the rest go into the bank
    let Pio {
        mut common, sm0, ..
    } = Pio::new(remaining.pio0, Irqs);
    let tone_pin = gpio.take_pio_pin(pins.beeper, &mut common)?;
    let tone = PioTone::new(&mut common, sm0, tone_pin);

    let mut bank = PinBank::new(&mut gpio);
    let mut output = |num: u8, level: Level| -> Result<Output<'static>, PinError> {
        Ok(Output::new(bank.take(num)?, level))
    };

    let lcd = Hd44780::new(
        output(pins.lcd.rs, Level::Low)?,
        output(pins.lcd.en, Level::Low)?,
        [
            output(pins.lcd.data[0], Level::Low)?,
            output(pins.lcd.data[1], Level::Low)?,
            output(pins.lcd.data[2], Level::Low)?,
            output(pins.lcd.data[3], Level::Low)?,
        ],
        Delay,
    );

    let clk = output(pins.segments.clk, Level::High)?;
    let rows = [
        output(pins.keypad.rows[0], Level::High)?,
        output(pins.keypad.rows[1], Level::High)?,
        output(pins.keypad.rows[2], Level::High)?,
        output(pins.keypad.rows[3], Level::High)?,
    ];
    let led = output(pins.led, Level::Low)?;

    let dio = OutputOpenDrain::new(bank.take(pins.segments.dio)?, Level::High);
    let segments = Tm1637::new(clk, dio, Delay);

    let mut input = |num: u8| -> Result<Input<'static>, PinError> {
        Ok(Input::new(bank.take(num)?, Pull::Up))
    };
    let cols = [
        input(pins.keypad.cols[0])?,
        input(pins.keypad.cols[1])?,
        input(pins.keypad.cols[2])?,
        input(pins.keypad.cols[3])?,
    ];
    let trigger = PressDetector::new(input(pins.trigger)?);

    Ok(Hardware {
        board: Peripherals {
            lcd,
            segments,
            keypad: MatrixKeypad::new(rows, cols),
            trigger,
            beeper: Beeper::new(tone, led, tone_hz),
        },
        pio: common,
    })
}
