//! Build configuration
//!
//! `BOMB_CONFIG` is generated by build.rs from bomb.toml, which has
//! already been validated; the assertions below re-check the generated
//! value with the same rules the core uses.

use ardubomb_core::beep::{BeepCurve, BeepParam, BeepStep};
use ardubomb_core::config::{
    BombConfig, DisplayGeometry, KeypadPins, LcdPins, PinAssignments, SegmentPins, ShowCodeExit,
};

include!(concat!(env!("OUT_DIR"), "/bomb_config.rs"));

const _: () = assert!(BOMB_CONFIG.beep_curve.is_monotonic());
const _: () = assert!(BOMB_CONFIG.pins.is_valid());

/// Main loop period
pub const TICK_INTERVAL_MS: u64 = 2;
