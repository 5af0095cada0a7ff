//! Configuration types
//!
//! Everything that differs between builds of the prop: timings, tone,
//! display geometry, pin wiring and the beep curve. All of it is fixed
//! at compile time.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
