//! Television: a small state machine for a TV set's user controls.
//!
//! The set tracks four things: power, mute, volume and channel. Power acts as
//! a gate, so every control except the power button does nothing while the
//! set is off. Channels wrap around, volume clamps.
//!
//! # Core Concepts
//!
//! - **Television**: the state itself, with one method per control
//! - **Guards**: pure predicates such as the power gate
//! - **History**: immutable log of observed state changes
//! - **Session**: dispatches remote [`Button`] presses and records history
//!
//! # Example
//!
//! ```rust
//! use television::Television;
//!
//! let mut tv = Television::new();
//! tv.channel_up(); // ignored, the set is off
//! tv.toggle_power();
//! tv.channel_down();
//! tv.volume_up();
//!
//! assert_eq!(tv.describe(), "Power = true, Channel = 3, Volume = 1");
//! ```

pub mod builder;
pub mod core;
pub mod remote;

// Re-export commonly used types
pub use builder::{BuildError, SettingViolation, TelevisionBuilder};
pub use self::core::{Guard, State, StateHistory, StateTransition, Television};
pub use remote::{Button, ParseButtonError, PressOutcome, Session};
