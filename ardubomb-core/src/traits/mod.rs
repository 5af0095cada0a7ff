//! Collaborator traits
//!
//! The scene logic talks to hardware only through these. Operations are
//! infallible at this level; drivers discard transient bus errors in
//! their impls.

pub mod annunciator;
pub mod display;
pub mod input;

pub use annunciator::Annunciator;
pub use display::{CharacterDisplay, CharacterDisplayExt, NumericDisplay, DOTS};
pub use input::{KeypadScanner, PressSensor};
