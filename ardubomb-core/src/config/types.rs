//! Configuration type definitions
//!
//! `BombConfig` gathers every per-build constant. Builds differ only in
//! these values; the scene logic is shared.

use super::hardware::PinAssignments;
use crate::beep::BeepCurve;

/// Base frequency of the countdown beep (A4 four octaves up)
pub const DEFAULT_BEEP_TONE_HZ: u32 = 440 * 16;

/// Press duration that counts as a long press
pub const DEFAULT_LONG_PRESS_MS: u32 = 2000;

/// Character LCD geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayGeometry {
    pub columns: u8,
    pub rows: u8,
}

impl DisplayGeometry {
    /// Standard 16x2 module
    pub const LCD_1602: Self = Self {
        columns: 16,
        rows: 2,
    };
}

/// What a key press does while the defuse code is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShowCodeExit {
    /// Keep showing the code until power cycle
    #[default]
    Stay,
    /// Any key restarts from the splash screen
    ReturnToFlash,
}

/// Complete build configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BombConfig {
    /// How long the boot splash stays up
    pub flash_duration_ms: u32,
    /// Countdown budget
    pub countdown_duration_ms: u32,
    /// Piezo frequency while a beep pulse is on
    pub beep_tone_hz: u32,
    /// Trigger hold time reported as a long press
    pub long_press_ms: u32,
    /// Character LCD geometry
    pub display: DisplayGeometry,
    /// Clock display brightness (0-7)
    pub brightness: u8,
    /// First line shown on boot
    pub splash_text: &'static str,
    /// Key handling in the ShowCode phase
    pub show_code_exit: ShowCodeExit,
    /// Board wiring
    pub pins: PinAssignments,
    /// Remaining-time to beep-pattern mapping
    pub beep_curve: BeepCurve,
}

impl BombConfig {
    /// Short demo build: ten second fuse
    pub const DEMO: Self = Self {
        flash_duration_ms: 500,
        countdown_duration_ms: 10 * 1000,
        beep_tone_hz: DEFAULT_BEEP_TONE_HZ,
        long_press_ms: DEFAULT_LONG_PRESS_MS,
        display: DisplayGeometry::LCD_1602,
        brightness: 2,
        splash_text: "ArduBomb, v0.1",
        show_code_exit: ShowCodeExit::Stay,
        pins: PinAssignments::PICO,
        beep_curve: BeepCurve::STANDARD,
    };

    /// Game build: two minute fuse, code screen can be left
    pub const FULL: Self = Self {
        countdown_duration_ms: 120 * 1000,
        show_code_exit: ShowCodeExit::ReturnToFlash,
        ..Self::DEMO
    };
}

impl Default for BombConfig {
    fn default() -> Self {
        Self::DEMO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_wiring() {
        assert_eq!(BombConfig::DEMO.pins, BombConfig::FULL.pins);
        assert_eq!(BombConfig::DEMO.beep_curve, BombConfig::FULL.beep_curve);
    }

    #[test]
    fn test_preset_timings() {
        assert_eq!(BombConfig::DEMO.countdown_duration_ms, 10_000);
        assert_eq!(BombConfig::FULL.countdown_duration_ms, 120_000);
        assert_eq!(BombConfig::DEMO.flash_duration_ms, 500);
        assert_eq!(BombConfig::DEMO.beep_tone_hz, 7040);
    }

    #[test]
    fn test_splash_fits_display() {
        let config = BombConfig::default();
        assert!(config.splash_text.len() <= config.display.columns as usize);
    }
}
