//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in ardubomb-core, bit-banged over `embedded-hal` pins:
//!
//! - HD44780 character LCD (4-bit bus)
//! - TM1637 four digit clock display
//! - 4x4 matrix keypad scanner

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;
pub mod segment;

#[cfg(test)]
pub(crate) mod mock;
