//! Clock backed by the embassy time driver

use ardubomb_hal::Clock;
use embassy_time::Instant;

/// Milliseconds since boot, truncated to `u32`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the documented wrap of the u32 clock
        Instant::now().as_millis() as u32
    }
}
