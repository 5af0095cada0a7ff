//! Edge-triggered beep scheduling
//!
//! The scheduler decides each tick whether the pulse should be on, but
//! only calls into the annunciator when that decision differs from the
//! last one recorded in the phase context.

use super::curve::{should_pulse, BeepCurve, BeepParam};
use crate::traits::Annunciator;

/// Maps remaining time to pulse state and actuates on edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepScheduler {
    curve: BeepCurve,
}

impl BeepScheduler {
    pub const fn new(curve: BeepCurve) -> Self {
        Self { curve }
    }

    /// Pattern for the given remaining time
    pub fn pattern_for(&self, remaining_ms: i32) -> BeepParam {
        self.curve.pattern_for(remaining_ms)
    }

    /// Whether the pulse is on at the given remaining time
    pub fn should_pulse(&self, remaining_ms: i32) -> bool {
        should_pulse(remaining_ms, self.pattern_for(remaining_ms))
    }

    /// Drive the annunciator for this tick
    ///
    /// Returns `true` if an actuation happened.
    pub fn update<A: Annunciator + ?Sized>(
        &self,
        remaining_ms: i32,
        is_beeping: &mut bool,
        annunciator: &mut A,
    ) -> bool {
        apply_edge(is_beeping, self.should_pulse(remaining_ms), annunciator)
    }
}

/// Actuate only if `pulse` differs from the recorded state
///
/// At most one actuation per state change; steady state performs no
/// hardware writes.
pub fn apply_edge<A: Annunciator + ?Sized>(
    is_beeping: &mut bool,
    pulse: bool,
    annunciator: &mut A,
) -> bool {
    if *is_beeping == pulse {
        return false;
    }
    annunciator.set_active(pulse);
    *is_beeping = pulse;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockAnnunciator;

    #[test]
    fn test_steady_state_does_not_actuate() {
        let mut ann = MockAnnunciator::default();
        let mut beeping = false;

        assert!(!apply_edge(&mut beeping, false, &mut ann));
        assert!(!apply_edge(&mut beeping, false, &mut ann));
        assert_eq!(ann.calls.len(), 0);
    }

    #[test]
    fn test_each_edge_actuates_once() {
        let mut ann = MockAnnunciator::default();
        let mut beeping = false;

        assert!(apply_edge(&mut beeping, true, &mut ann));
        assert!(!apply_edge(&mut beeping, true, &mut ann));
        assert!(apply_edge(&mut beeping, false, &mut ann));
        assert!(!apply_edge(&mut beeping, false, &mut ann));

        assert_eq!(ann.calls.as_slice(), &[true, false]);
        assert!(!beeping);
    }

    #[test]
    fn test_update_follows_countdown() {
        let scheduler = BeepScheduler::new(BeepCurve::STANDARD);
        let mut ann = MockAnnunciator::default();
        let mut beeping = false;

        // 100ms / 20% near expiry: on window is phase 81..99
        assert!(!scheduler.update(4_050, &mut beeping, &mut ann));
        assert!(scheduler.update(4_090, &mut beeping, &mut ann));
        assert!(!scheduler.update(4_085, &mut beeping, &mut ann));
        assert!(scheduler.update(4_070, &mut beeping, &mut ann));
        assert_eq!(ann.calls.as_slice(), &[true, false]);
    }

    #[test]
    fn test_expiry_turns_pulse_off() {
        let scheduler = BeepScheduler::new(BeepCurve::STANDARD);
        let mut ann = MockAnnunciator::default();
        let mut beeping = true;

        assert!(scheduler.update(-3, &mut beeping, &mut ann));
        assert_eq!(ann.calls.as_slice(), &[false]);
    }
}
