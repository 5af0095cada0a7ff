//! Monotonic clock abstraction
//!
//! Time is a `u32` millisecond counter since boot. It wraps after
//! roughly 49.7 days; all interval arithmetic goes through
//! [`elapsed_ms`], which is correct across a single wrap.

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since boot, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;
}

/// Interval between two wrapping timestamps
///
/// `now` is assumed to be at or after `since`, at most one wrap later.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_without_wrap() {
        assert_eq!(elapsed_ms(1500, 1000), 500);
        assert_eq!(elapsed_ms(1000, 1000), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let since = u32::MAX - 99;
        assert_eq!(elapsed_ms(0, since), 100);
        assert_eq!(elapsed_ms(400, since), 500);
    }
}
