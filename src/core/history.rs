//! History of observed state changes.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state change.
///
/// `trigger` names what caused the change, e.g. the remote button label.
///
/// # Example
///
/// ```rust
/// use television::core::{StateTransition, Television};
/// use chrono::Utc;
///
/// let before = Television::new();
/// let mut after = before;
/// after.toggle_power();
///
/// let transition = StateTransition {
///     from: before,
///     to: after,
///     timestamp: Utc::now(),
///     trigger: "power".to_string(),
/// };
/// assert!(transition.to.is_on());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// State before the change
    pub from: S,
    /// State after the change
    pub to: S,
    /// When the change was observed
    pub timestamp: DateTime<Utc>,
    /// What caused the change
    pub trigger: String,
}

/// Ordered history of state changes.
///
/// History is immutable: `record` returns a new history with the
/// transition appended and leaves the original untouched.
///
/// # Example
///
/// ```rust
/// use television::core::{StateHistory, StateTransition, Television};
/// use chrono::Utc;
///
/// let off = Television::new();
/// let mut on = off;
/// on.toggle_power();
/// let mut tuned = on;
/// tuned.channel_up();
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: off,
///         to: on,
///         timestamp: Utc::now(),
///         trigger: "power".to_string(),
///     })
///     .record(StateTransition {
///         from: on,
///         to: tuned,
///         timestamp: Utc::now(),
///         trigger: "channel-up".to_string(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&off, &on, &tuned]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first element is the `from` state of the first transition,
    /// followed by the `to` state of every transition. Empty history
    /// yields an empty path.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history, or if the clock went backwards
    /// between the two records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
