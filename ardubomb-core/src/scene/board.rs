//! The set of peripherals a scene controller drives

use crate::traits::{Annunciator, CharacterDisplay, KeypadScanner, NumericDisplay, PressSensor};

/// Access to every collaborator the phases use
pub trait Board {
    type Lcd: CharacterDisplay;
    type Segments: NumericDisplay;
    type Keypad: KeypadScanner;
    type Trigger: PressSensor;
    type Beeper: Annunciator;

    fn lcd(&mut self) -> &mut Self::Lcd;
    fn segments(&mut self) -> &mut Self::Segments;
    fn keypad(&mut self) -> &mut Self::Keypad;
    fn trigger(&mut self) -> &mut Self::Trigger;
    fn beeper(&mut self) -> &mut Self::Beeper;
}

/// Plain bundle of peripherals
pub struct Peripherals<L, S, K, T, A> {
    pub lcd: L,
    pub segments: S,
    pub keypad: K,
    pub trigger: T,
    pub beeper: A,
}

impl<L, S, K, T, A> Board for Peripherals<L, S, K, T, A>
where
    L: CharacterDisplay,
    S: NumericDisplay,
    K: KeypadScanner,
    T: PressSensor,
    A: Annunciator,
{
    type Lcd = L;
    type Segments = S;
    type Keypad = K;
    type Trigger = T;
    type Beeper = A;

    fn lcd(&mut self) -> &mut L {
        &mut self.lcd
    }

    fn segments(&mut self) -> &mut S {
        &mut self.segments
    }

    fn keypad(&mut self) -> &mut K {
        &mut self.keypad
    }

    fn trigger(&mut self) -> &mut T {
        &mut self.trigger
    }

    fn beeper(&mut self) -> &mut A {
        &mut self.beeper
    }
}
