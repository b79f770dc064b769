//! Core television state and machine vocabulary.
//!
//! This module contains the pure part of the crate:
//! - The `Television` state and its control operations
//! - The `State` trait it implements
//! - Guard predicates such as the power gate
//! - Immutable history tracking
//!
//! Nothing here logs or performs I/O.

mod guard;
mod history;
mod state;
mod television;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use television::Television;
