//! RP2040-specific HAL for the bomb prop firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `ardubomb-hal` traits, plus RP2040-specific functionality:
//!
//! - Config-driven GPIO allocation by pin number
//! - PIO-based square-wave tone generation
//! - Millisecond clock on top of the embassy time driver

#![no_std]

pub mod clock;
pub mod pins;
pub mod tone;

pub use clock::EmbassyClock;
pub use pins::{PinBank, PinBankPeripherals, PinError, RemainingPeripherals};
pub use tone::PioTone;

// Re-export shared traits for convenience
pub use ardubomb_hal::{Clock, ToneOutput};
