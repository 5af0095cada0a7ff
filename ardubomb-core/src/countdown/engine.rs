//! Remaining-time computation
//!
//! Time is a wrapping `u32` millisecond counter. Elapsed time is taken
//! with wrapping subtraction, so a countdown that straddles the counter
//! wrap still counts down as long as the phase lasts less than ~49 days.

use core::fmt::Write;

use ardubomb_hal::elapsed_ms;
use heapless::String;

use crate::traits::DOTS;

/// Remaining time of a countdown of `duration_ms` started at `start_ms`
///
/// Negative once the countdown has run out. Saturates at the `i32` range.
pub fn remaining_ms(now_ms: u32, start_ms: u32, duration_ms: u32) -> i32 {
    let elapsed = elapsed_ms(now_ms, start_ms);
    let remaining = i64::from(duration_ms) - i64::from(elapsed);
    remaining.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Expiry test: zero counts as expired
pub const fn is_expired(remaining_ms: i32) -> bool {
    remaining_ms <= 0
}

/// Snapshot of a running countdown, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    remaining_ms: i32,
}

impl Countdown {
    pub const fn new(remaining_ms: i32) -> Self {
        Self { remaining_ms }
    }

    /// Snapshot for the given clock reading
    pub fn at(now_ms: u32, start_ms: u32, duration_ms: u32) -> Self {
        Self::new(remaining_ms(now_ms, start_ms, duration_ms))
    }

    /// Raw remaining time, may be negative
    pub const fn remaining_ms(&self) -> i32 {
        self.remaining_ms
    }

    pub const fn is_expired(&self) -> bool {
        is_expired(self.remaining_ms)
    }

    /// Remaining time, never below zero
    pub const fn clamped_ms(&self) -> u32 {
        if self.remaining_ms > 0 {
            self.remaining_ms as u32
        } else {
            0
        }
    }

    /// Whole seconds remaining (truncated)
    pub const fn seconds(&self) -> u32 {
        self.clamped_ms() / 1000
    }

    /// Seconds as zero-padded text, at least three digits
    pub fn lcd_text(&self) -> String<8> {
        let mut text = String::new();
        // i32::MAX ms is 7 digits of seconds, always fits
        write!(text, "{:03}", self.seconds()).ok();
        text
    }

    /// `mm*100 + ss` for the clock display, minutes capped at 99
    pub const fn clock_value(&self) -> u16 {
        let seconds = self.seconds();
        let mut minutes = seconds / 60;
        if minutes > 99 {
            minutes = 99;
        }
        (minutes * 100 + seconds % 60) as u16
    }

    /// Colon lit on odd half-seconds
    pub const fn colon_flags(&self) -> u8 {
        if (self.clamped_ms() / 500) % 2 == 1 {
            DOTS
        } else {
            0
        }
    }
}
