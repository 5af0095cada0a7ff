//! Per-phase mutable state

/// State owned by the active phase
///
/// Replaced with a fresh value on every transition; nothing carries over
/// from a previous occupancy of the same phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseContext {
    /// Clock reading at phase entry
    pub phase_start_ms: u32,
    /// Last pulse state sent to the beeper
    pub is_beeping: bool,
    /// Last value on the clock display, `None` while blank
    pub display_value: Option<u16>,
    /// Dot flags sent with `display_value`
    pub display_flags: u8,
    /// Last seconds value printed on the LCD
    pub lcd_seconds: Option<u32>,
    /// Long-press reading from the last countdown tick
    pub trigger_held: bool,
    /// Code shown in the ShowCode phase (0-9999)
    pub defuse_code: u16,
}

impl PhaseContext {
    /// Fresh context for a phase entered at `now_ms`
    pub const fn new(now_ms: u32) -> Self {
        Self {
            phase_start_ms: now_ms,
            is_beeping: false,
            display_value: None,
            display_flags: 0,
            lcd_seconds: None,
            trigger_held: false,
            defuse_code: 0,
        }
    }
}

impl Default for PhaseContext {
    fn default() -> Self {
        Self::new(0)
    }
}
