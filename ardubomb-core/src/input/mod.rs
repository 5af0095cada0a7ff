//! Player input: keypad keys and the press/tilt button

pub mod key;
pub mod press;

pub use key::{Key, KEYMAP};
pub use press::{PressDetector, DEBOUNCE_MS};
