//! Keypad drivers

pub mod matrix;

pub use matrix::{MatrixKeypad, SCAN_INTERVAL_MS};
