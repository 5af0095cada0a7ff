//! Phase definitions

/// Phases of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Boot splash
    Flash,
    /// Mode menu
    SelectMode,
    /// Countdown with beeping
    CountdownButton,
    /// Random defuse code on screen
    ShowCode,
    /// Countdown ran out
    Boom,
}

impl Phase {
    /// Phase entered on power-up
    pub const INITIAL: Phase = Phase::Flash;

    /// Short name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Flash => "flash",
            Phase::SelectMode => "select-mode",
            Phase::CountdownButton => "countdown-button",
            Phase::ShowCode => "show-code",
            Phase::Boom => "boom",
        }
    }

    /// Whether the countdown beeper may run in this phase
    pub const fn beeper_allowed(&self) -> bool {
        matches!(self, Phase::CountdownButton)
    }

    /// Only a reset leaves this phase
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Phase::Boom)
    }
}
