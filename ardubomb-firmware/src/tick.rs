//! Scene loop
//!
//! One pass per tick: read the clock once, let the controller run the
//! active phase, log what changed, then sleep until the next tick. The
//! sleep is the only suspension point.

use ardubomb_core::scene::SceneController;
use ardubomb_hal_rp2040::{Clock, EmbassyClock};
use defmt::*;
use embassy_time::{Duration, Ticker};
use rand_pcg::Pcg32;

use crate::board::Board;
use crate::config::TICK_INTERVAL_MS;

pub type Controller = SceneController<Board, Pcg32>;

/// Run the scene controller forever
pub async fn run(mut controller: Controller, clock: EmbassyClock) -> ! {
    info!("Scene loop started ({} ms tick)", TICK_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    let mut trigger_held = false;

    loop {
        let now_ms = clock.now_ms();

        if let Some(t) = controller.tick(now_ms) {
            info!("Phase {} -> {} @ {} ms", t.from.name(), t.to.name(), t.at_ms);
            if t.to.is_terminal() {
                warn!("Fuse ran out, waiting for reset key");
            }
        }

        let held = controller.context().trigger_held;
        if held != trigger_held {
            debug!("Trigger long press: {}", held);
            trigger_held = held;
        }

        ticker.next().await;
    }
}
