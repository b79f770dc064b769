//! Guard predicates for gating operations on a state.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate deciding whether an operation may run against a state.
///
/// The television's power gate is a guard: see
/// [`Television::power_gate`](crate::core::Television::power_gate).
///
/// # Example
///
/// ```rust
/// use television::core::{Guard, Television};
///
/// let loud_enough = Guard::new(|tv: &Television| tv.volume() >= 1);
///
/// let mut tv = Television::new();
/// assert!(!loud_enough.check(&tv));
///
/// tv.toggle_power();
/// tv.volume_up();
/// assert!(loud_enough.check(&tv));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard lets an operation run from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
