//! Beep pattern scheduling
//!
//! Turns remaining countdown time into a pulse train: slow and sparse
//! far from expiry, fast and dense close to it. Hardware is only touched
//! when the pulse state flips.

pub mod beeper;
pub mod curve;
pub mod scheduler;

pub use beeper::Beeper;
pub use curve::{should_pulse, BeepCurve, BeepParam, BeepStep, PERMILLE};
pub use scheduler::BeepScheduler;
