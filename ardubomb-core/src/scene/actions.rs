//! Phase entry and tick actions
//!
//! Both dispatchers match exhaustively on [`Phase`], so a new phase
//! without actions does not compile.

use core::fmt::Write;

use heapless::String;
use rand_core::{RngCore, SeedableRng};

use super::board::Board;
use super::controller::SceneController;
use super::phase::Phase;
use crate::config::ShowCodeExit;
use crate::countdown::Countdown;
use crate::input::Key;
use crate::traits::{
    CharacterDisplay, CharacterDisplayExt, KeypadScanner, NumericDisplay, PressSensor, DOTS,
};

impl<B: Board, R: RngCore + SeedableRng> SceneController<B, R> {
    /// Entry action of the active phase
    pub(super) fn enter(&mut self, now_ms: u32) {
        match self.phase {
            Phase::Flash => self.enter_flash(),
            Phase::SelectMode => self.enter_select_mode(),
            Phase::CountdownButton => self.enter_countdown(),
            Phase::ShowCode => self.enter_show_code(now_ms),
            Phase::Boom => self.enter_boom(),
        }
    }

    /// Tick action of the active phase; `Some` names the next phase
    pub(super) fn tick_phase(&mut self, now_ms: u32) -> Option<Phase> {
        match self.phase {
            Phase::Flash => self.tick_flash(now_ms),
            Phase::SelectMode => self.tick_select_mode(now_ms),
            Phase::CountdownButton => self.tick_countdown(now_ms),
            Phase::ShowCode => self.tick_show_code(now_ms),
            Phase::Boom => self.tick_boom(now_ms),
        }
    }

    fn enter_flash(&mut self) {
        let display = self.config.display;
        self.board.segments().set_brightness(self.config.brightness);
        let lcd = self.board.lcd();
        lcd.begin(display.columns, display.rows);
        lcd.print(self.config.splash_text);
    }

    fn tick_flash(&mut self, now_ms: u32) -> Option<Phase> {
        let elapsed = ardubomb_hal::elapsed_ms(now_ms, self.ctx.phase_start_ms);
        (elapsed > self.config.flash_duration_ms).then_some(Phase::SelectMode)
    }

    fn enter_select_mode(&mut self) {
        let lcd = self.board.lcd();
        lcd.print_line(0, "Select mode");
        lcd.print_line(1, "A: Btn, B: Code");
    }

    fn tick_select_mode(&mut self, now_ms: u32) -> Option<Phase> {
        match self.board.keypad().poll_key(now_ms) {
            Some(Key::A) => Some(Phase::CountdownButton),
            Some(Key::B) => Some(Phase::ShowCode),
            _ => None,
        }
    }

    fn enter_countdown(&mut self) {
        self.board.lcd().print_line(0, "Push both buttons...");
        self.board
            .trigger()
            .set_long_press_ms(self.config.long_press_ms);
        self.ctx.is_beeping = false;
    }

    fn tick_countdown(&mut self, now_ms: u32) -> Option<Phase> {
        let countdown = Countdown::at(
            now_ms,
            self.ctx.phase_start_ms,
            self.config.countdown_duration_ms,
        );
        let remaining = countdown.remaining_ms();

        self.scheduler
            .update(remaining, &mut self.ctx.is_beeping, self.board.beeper());

        self.ctx.trigger_held = self.board.trigger().is_long_pressed();

        self.update_display(countdown.clock_value(), countdown.colon_flags());

        let seconds = countdown.seconds();
        if self.ctx.lcd_seconds != Some(seconds) {
            self.ctx.lcd_seconds = Some(seconds);
            self.board
                .lcd()
                .print_line(1, countdown.lcd_text().as_str());
        }

        countdown.is_expired().then_some(Phase::Boom)
    }

    fn enter_show_code(&mut self, now_ms: u32) {
        let code = self.draw_code(now_ms);
        self.ctx.defuse_code = code;

        let mut text: String<5> = String::new();
        // At most four digits
        write!(text, "{}", code).ok();

        let lcd = self.board.lcd();
        lcd.print_line(0, "Code:");
        lcd.print_line(1, text.as_str());
    }

    fn tick_show_code(&mut self, now_ms: u32) -> Option<Phase> {
        let key = self.board.keypad().poll_key(now_ms);
        match (key, self.config.show_code_exit) {
            (Some(_), ShowCodeExit::ReturnToFlash) => Some(Phase::Flash),
            _ => None,
        }
    }

    fn enter_boom(&mut self) {
        let lcd = self.board.lcd();
        lcd.print_line(0, "Boom, you are dead");
        lcd.print_line(1, "Press any Button");
    }

    fn tick_boom(&mut self, now_ms: u32) -> Option<Phase> {
        if self.board.keypad().poll_key(now_ms).is_some() {
            return Some(Phase::Flash);
        }

        if (now_ms / 1000) % 2 == 0 {
            self.clear_display();
        } else {
            self.update_display(0, DOTS);
        }
        None
    }
}
