//! Beep curve: remaining time to pulse period and duty cycle
//!
//! Duty cycles are fixed-point per-mille (1000 = always on) so the
//! gating math stays in integers.

/// Full scale of a per-mille fraction
pub const PERMILLE: u16 = 1000;

/// One pulse pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepParam {
    /// Pulse period in ms
    pub period_ms: u32,
    /// Fraction of each period the pulse is on, in 1/1000
    pub duty_permille: u16,
}

impl BeepParam {
    pub const fn new(period_ms: u32, duty_permille: u16) -> Self {
        Self {
            period_ms,
            duty_permille,
        }
    }

    /// Period non-zero and duty in (0, 1000]
    pub const fn is_valid(&self) -> bool {
        self.period_ms > 0 && self.duty_permille > 0 && self.duty_permille <= PERMILLE
    }

    /// True if `self` is less urgent than `other`
    ///
    /// Less urgent means a lower duty cycle or a longer period.
    pub const fn is_calmer_than(&self, other: &BeepParam) -> bool {
        self.duty_permille < other.duty_permille || self.period_ms > other.period_ms
    }
}

/// Curve entry: use `param` while remaining time is above `above_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepStep {
    pub above_ms: u32,
    pub param: BeepParam,
}

impl BeepStep {
    pub const fn new(above_ms: u32, period_ms: u32, duty_permille: u16) -> Self {
        Self {
            above_ms,
            param: BeepParam::new(period_ms, duty_permille),
        }
    }
}

/// Step function from remaining time to [`BeepParam`]
///
/// `steps` are ordered by strictly decreasing `above_ms`. Remaining time
/// at or below the last threshold (including expiry) uses `final_param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeepCurve {
    pub steps: &'static [BeepStep],
    pub final_param: BeepParam,
}

const STANDARD_STEPS: &[BeepStep] = &[
    BeepStep::new(60_000, 6000, 50),
    BeepStep::new(30_000, 3000, 50),
    BeepStep::new(15_000, 1000, 50),
    BeepStep::new(5_000, 500, 100),
];

impl BeepCurve {
    /// Calibrated curve for fuses of up to a few minutes
    pub const STANDARD: Self = Self {
        steps: STANDARD_STEPS,
        final_param: BeepParam::new(100, 200),
    };

    /// Select the pattern for the given remaining time
    pub fn pattern_for(&self, remaining_ms: i32) -> BeepParam {
        let remaining = i64::from(remaining_ms);
        self.steps
            .iter()
            .find(|step| remaining > i64::from(step.above_ms))
            .map(|step| step.param)
            .unwrap_or(self.final_param)
    }

    /// Check ordering and urgency
    ///
    /// Thresholds must strictly decrease, every pattern must be valid, and
    /// no pattern may be calmer than the one used further from expiry.
    pub const fn is_monotonic(&self) -> bool {
        let mut i = 0;
        while i < self.steps.len() {
            let step = &self.steps[i];
            if !step.param.is_valid() {
                return false;
            }
            if i > 0 {
                let prev = &self.steps[i - 1];
                if step.above_ms >= prev.above_ms || step.param.is_calmer_than(&prev.param) {
                    return false;
                }
            }
            i += 1;
        }
        if !self.final_param.is_valid() {
            return false;
        }
        if let Some(last) = self.steps.last() {
            if self.final_param.is_calmer_than(&last.param) {
                return false;
            }
        }
        true
    }
}

const _: () = assert!(BeepCurve::STANDARD.is_monotonic());

/// Sawtooth gate synchronised to the countdown
///
/// The position within the current period is `remaining mod period`;
/// the pulse is on when that fraction exceeds `1 - duty`. Expired or
/// negative remaining time never pulses.
pub fn should_pulse(remaining_ms: i32, param: BeepParam) -> bool {
    if remaining_ms <= 0 || param.period_ms == 0 {
        return false;
    }
    let period = u64::from(param.period_ms);
    let phase = u64::from(remaining_ms.unsigned_abs()) % period;
    let off_permille = u64::from(PERMILLE.saturating_sub(param.duty_permille));
    phase * u64::from(PERMILLE) > period * off_permille
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_breakpoints() {
        let curve = BeepCurve::STANDARD;
        assert_eq!(curve.pattern_for(120_000), BeepParam::new(6000, 50));
        assert_eq!(curve.pattern_for(60_001), BeepParam::new(6000, 50));
        assert_eq!(curve.pattern_for(60_000), BeepParam::new(3000, 50));
        assert_eq!(curve.pattern_for(20_000), BeepParam::new(1000, 50));
        assert_eq!(curve.pattern_for(10_000), BeepParam::new(500, 100));
        assert_eq!(curve.pattern_for(5_000), BeepParam::new(100, 200));
        assert_eq!(curve.pattern_for(0), BeepParam::new(100, 200));
        assert_eq!(curve.pattern_for(-250), BeepParam::new(100, 200));
    }

    #[test]
    fn test_non_monotonic_curve_rejected() {
        const BAD: &[BeepStep] = &[BeepStep::new(30_000, 1000, 100), BeepStep::new(5_000, 500, 50)];
        let curve = BeepCurve {
            steps: BAD,
            final_param: BeepParam::new(100, 200),
        };
        assert!(!curve.is_monotonic());
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        const BAD: &[BeepStep] = &[BeepStep::new(5_000, 1000, 50), BeepStep::new(30_000, 500, 100)];
        let curve = BeepCurve {
            steps: BAD,
            final_param: BeepParam::new(100, 200),
        };
        assert!(!curve.is_monotonic());
    }

    #[test]
    fn test_zero_duty_rejected() {
        let curve = BeepCurve {
            steps: &[],
            final_param: BeepParam::new(100, 0),
        };
        assert!(!curve.is_monotonic());
    }

    #[test]
    fn test_pulse_window_near_expiry() {
        // 100ms period, 20% duty: on for phase in (80, 100)
        let param = BeepParam::new(100, 200);
        assert!(!should_pulse(1_050, param));
        assert!(!should_pulse(1_080, param));
        assert!(should_pulse(1_081, param));
        assert!(should_pulse(1_099, param));
        assert!(!should_pulse(1_100, param));
    }

    #[test]
    fn test_no_pulse_after_expiry() {
        let param = BeepParam::new(100, 200);
        assert!(!should_pulse(0, param));
        assert!(!should_pulse(-15, param));
        assert!(!should_pulse(-95, param));
    }

    #[test]
    fn test_full_duty_pulses_except_on_boundary() {
        let param = BeepParam::new(500, PERMILLE);
        assert!(should_pulse(1, param));
        assert!(should_pulse(499, param));
        assert!(!should_pulse(500, param));
    }

    proptest! {
        #[test]
        fn prop_closer_to_expiry_never_calmer(a in 1i32..400_000, b in 1i32..400_000) {
            let (far, near) = if a > b { (a, b) } else { (b, a) };
            let curve = BeepCurve::STANDARD;
            let far_param = curve.pattern_for(far);
            let near_param = curve.pattern_for(near);
            prop_assert!(!near_param.is_calmer_than(&far_param));
        }

        #[test]
        fn prop_duty_bounds_on_time(remaining in 1i32..200_000) {
            let param = BeepCurve::STANDARD.pattern_for(remaining);
            let period = param.period_ms as i32;
            let base = remaining - remaining % period;
            let on = (base..base + period).filter(|r| should_pulse(*r, param)).count() as u32;
            let expected = param.period_ms * u32::from(param.duty_permille) / u32::from(PERMILLE);
            prop_assert!(on + 1 >= expected && on <= expected);
        }
    }
}
