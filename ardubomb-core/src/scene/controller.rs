//! Scene controller
//!
//! Owns the peripherals, the active phase and its context. The main loop
//! calls [`SceneController::tick`] with a fresh clock reading; at most
//! one transition happens per tick.

use core::marker::PhantomData;

use rand_core::{RngCore, SeedableRng};

use super::board::Board;
use super::context::PhaseContext;
use super::phase::Phase;
use crate::beep::BeepScheduler;
use crate::beep::scheduler::apply_edge;
use crate::config::BombConfig;
use crate::traits::{Annunciator, CharacterDisplay, NumericDisplay, PressSensor};

/// Record of a completed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub at_ms: u32,
}

/// Phase dispatcher
///
/// `R` is the generator the defuse code is drawn from. A fresh one is
/// seeded from the clock on every ShowCode entry, so no generator state
/// is kept between draws.
pub struct SceneController<B, R> {
    pub(super) board: B,
    pub(super) config: BombConfig,
    pub(super) scheduler: BeepScheduler,
    pub(super) phase: Phase,
    pub(super) ctx: PhaseContext,
    _rng: PhantomData<fn() -> R>,
}

impl<B: Board, R: RngCore + SeedableRng> SceneController<B, R> {
    /// Create a controller; call [`start`](Self::start) before ticking
    pub fn new(board: B, config: BombConfig) -> Self {
        Self {
            board,
            config,
            scheduler: BeepScheduler::new(config.beep_curve),
            phase: Phase::INITIAL,
            ctx: PhaseContext::default(),
            _rng: PhantomData,
        }
    }

    /// Enter the initial phase
    pub fn start(&mut self, now_ms: u32) {
        self.transition_to(Phase::INITIAL, now_ms);
    }

    /// Leave the current phase and enter `phase`
    ///
    /// Silences a beeper left on by the old phase, or any sounding beeper
    /// when `phase` does not allow one. Clears both displays, resets the
    /// phase context with `phase_start_ms = now_ms` and runs the entry
    /// action.
    pub fn transition_to(&mut self, phase: Phase, now_ms: u32) {
        let beeper = self.board.beeper();
        let mut sounding =
            self.ctx.is_beeping || (!phase.beeper_allowed() && beeper.is_active());
        apply_edge(&mut sounding, false, beeper);

        self.board.lcd().clear();
        self.clear_display();

        self.ctx = PhaseContext::new(now_ms);
        self.phase = phase;
        self.enter(now_ms);
    }

    /// Run one loop iteration
    ///
    /// Returns the transition taken, if any.
    pub fn tick(&mut self, now_ms: u32) -> Option<Transition> {
        self.board.trigger().tick(now_ms);

        let from = self.phase;
        let to = self.tick_phase(now_ms)?;
        self.transition_to(to, now_ms);

        Some(Transition {
            from,
            to,
            at_ms: now_ms,
        })
    }

    /// Active phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Context of the active phase
    pub fn context(&self) -> &PhaseContext {
        &self.ctx
    }

    pub fn config(&self) -> &BombConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Push a value to the clock display unless it is already showing
    pub(super) fn update_display(&mut self, value: u16, flags: u8) {
        if self.ctx.display_value != Some(value) || self.ctx.display_flags != flags {
            self.ctx.display_value = Some(value);
            self.ctx.display_flags = flags;
            self.board.segments().show_value(value, flags);
        }
    }

    /// Blank the clock display unless it is already blank
    pub(super) fn clear_display(&mut self) {
        if self.ctx.display_value.is_some() {
            self.ctx.display_value = None;
            self.ctx.display_flags = 0;
            self.board.segments().clear();
        }
    }

    /// Seed a generator from the clock and draw a code in 0..10000
    pub(super) fn draw_code(&self, now_ms: u32) -> u16 {
        let mut rng = R::seed_from_u64(u64::from(now_ms));
        (rng.next_u32() % 10_000) as u16
    }
}
