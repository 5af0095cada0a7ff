//! Board-agnostic core logic for the bomb prop firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (character LCD, clock display, keypad, press sensor)
//! - Scene controller and phase dispatch
//! - Countdown arithmetic and display formatting
//! - Beep pattern scheduling with edge-triggered actuation
//! - Key map and long-press detection
//! - Configuration type definitions and presets

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod beep;
pub mod config;
pub mod countdown;
pub mod input;
pub mod scene;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;
