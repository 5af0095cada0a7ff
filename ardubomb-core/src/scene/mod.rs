//! Scene control
//!
//! The prop runs as a sequence of phases. Each phase has an entry action
//! run once on transition and a tick action run every loop iteration;
//! the tick action either stays or names the next phase.
//!
//! ```text
//!   Flash ──(splash time)──> SelectMode ──A──> CountdownButton ──(expiry)──> Boom
//!     ^                          │                                             │
//!     │                          B                                          any key
//!     │                          v                                             │
//!     └───(any key, if enabled)─ ShowCode                                      │
//!     └────────────────────────────────────────────────────────────────────────┘
//! ```

mod actions;
pub mod board;
pub mod context;
pub mod controller;
pub mod phase;

pub use board::{Board, Peripherals};
pub use context::PhaseContext;
pub use controller::{SceneController, Transition};
pub use phase::Phase;
