//! ArduBomb - Countdown Prop Firmware
//!
//! Main firmware binary for RP2040-based bomb props. All behaviour lives
//! in the board-agnostic scene controller; this binary claims the
//! peripherals named in bomb.toml and runs the polling loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use {defmt_rtt as _, panic_probe as _};

use ardubomb_hal_rp2040::{Clock, EmbassyClock};

use crate::board::Hardware;
use crate::config::BOMB_CONFIG;

mod board;
mod config;
mod tick;

bind_interrupts!(pub struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ArduBomb firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let Hardware { board, pio: _pio } =
        match board::init(p, &BOMB_CONFIG.pins, BOMB_CONFIG.beep_tone_hz) {
            Ok(hw) => hw,
            Err(e) => {
                error!("Pin allocation failed: {}", e);
                defmt::panic!("cannot continue without peripherals");
            }
        };
    info!(
        "Config: fuse {} ms, splash {} ms, tone {} Hz",
        BOMB_CONFIG.countdown_duration_ms,
        BOMB_CONFIG.flash_duration_ms,
        BOMB_CONFIG.beep_tone_hz
    );

    let clock = EmbassyClock;
    let mut controller = tick::Controller::new(board, BOMB_CONFIG);
    controller.start(clock.now_ms());
    info!("Entered {}", controller.phase().name());

    tick::run(controller, clock).await
}
