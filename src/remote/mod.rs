//! Remote-control shell around the pure television state.
//!
//! - **Buttons**: one per control, parseable from text for driving programs
//! - **Session**: dispatches presses, reports ignored ones and records history
//!
//! The session is the only place in the crate that logs.

mod button;
mod session;

pub use button::{Button, ParseButtonError};
pub use session::{PressOutcome, Session};
