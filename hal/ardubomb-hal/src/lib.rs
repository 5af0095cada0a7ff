//! ArduBomb Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that `embedded-hal`
//! does not cover, so the same scene logic can run on different boards
//! and on the host under test.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ardubomb-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ardubomb-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ ardubomb-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`tone::ToneOutput`] - Square-wave tone generation for a piezo
//! - [`clock::Clock`] - Monotonic millisecond clock
//!
//! Digital pins use `embedded_hal::digital` directly.

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use clock::{elapsed_ms, Clock};
pub use tone::ToneOutput;
