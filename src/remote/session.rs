//! Session that drives a television from remote button presses.

use crate::core::{Guard, State, StateHistory, StateTransition, Television};
use crate::remote::button::Button;
use chrono::Utc;
use tracing::{debug, trace};

/// Result of pressing a single button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The television moved to a new state
    Changed(Television),

    /// The control ran but the state stayed the same (e.g. volume at max)
    Unchanged,

    /// The power gate blocked the button
    Ignored { button: Button },
}

/// Owns a television and records every change made through it.
///
/// # Example
///
/// ```rust
/// use television::{Button, PressOutcome, Session};
///
/// let mut session = Session::default();
///
/// assert_eq!(
///     session.press(Button::Mute),
///     PressOutcome::Ignored { button: Button::Mute }
/// );
///
/// session.press(Button::Power);
/// session.press(Button::VolumeUp);
///
/// assert_eq!(session.history().len(), 2);
/// assert_eq!(
///     session.television().describe(),
///     "Power = true, Channel = 0, Volume = 1"
/// );
/// ```
#[derive(Debug)]
pub struct Session {
    television: Television,
    power_gate: Guard<Television>,
    history: StateHistory<Television>,
}

impl Session {
    pub fn new(television: Television) -> Self {
        Self {
            television,
            power_gate: Television::power_gate(),
            history: StateHistory::new(),
        }
    }

    /// Current television state (pure)
    pub fn television(&self) -> &Television {
        &self.television
    }

    /// Changes recorded so far (pure)
    pub fn history(&self) -> &StateHistory<Television> {
        &self.history
    }

    /// End the session, keeping the television.
    pub fn into_television(self) -> Television {
        self.television
    }

    /// Press one button.
    ///
    /// Gated buttons are not dispatched at all while the set is off.
    /// Only presses that change the state are recorded in the history.
    pub fn press(&mut self, button: Button) -> PressOutcome {
        if button.requires_power() && !self.power_gate.check(&self.television) {
            debug!(%button, state = self.television.name(), "button ignored, power is off");
            return PressOutcome::Ignored { button };
        }

        let from = self.television;
        self.television.press(button);

        if self.television == from {
            trace!(%button, "button pressed, state unchanged");
            return PressOutcome::Unchanged;
        }

        debug!(
            %button,
            from = %from,
            to = %self.television,
            "television state changed"
        );
        self.history = self.history.record(StateTransition {
            from,
            to: self.television,
            timestamp: Utc::now(),
            trigger: button.label().to_string(),
        });
        PressOutcome::Changed(self.television)
    }

    /// Press buttons in order, returning one outcome per press.
    pub fn press_all<I>(&mut self, buttons: I) -> Vec<PressOutcome>
    where
        I: IntoIterator<Item = Button>,
    {
        buttons.into_iter().map(|b| self.press(b)).collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Television::new())
    }
}
