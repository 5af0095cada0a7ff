//! Countdown arithmetic and display formatting

pub mod engine;

pub use engine::{is_expired, remaining_ms, Countdown};
