//! The television state and its control operations.

use super::guard::Guard;
use super::state::State;
use crate::builder::TelevisionBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-controllable state of a television set.
///
/// Power is a global gate: while the set is off, every control except
/// [`toggle_power`](Self::toggle_power) is a no-op. Channels wrap around
/// between [`MIN_CHANNEL`](Self::MIN_CHANNEL) and
/// [`MAX_CHANNEL`](Self::MAX_CHANNEL); volume clamps between
/// [`MIN_VOLUME`](Self::MIN_VOLUME) and [`MAX_VOLUME`](Self::MAX_VOLUME).
///
/// Turning the set off does not reset mute, volume or channel.
///
/// # Example
///
/// ```rust
/// use television::Television;
///
/// let mut tv = Television::new();
/// tv.toggle_power();
/// assert_eq!(tv.describe(), "Power = true, Channel = 0, Volume = 0");
///
/// tv.channel_down();
/// assert_eq!(tv.channel(), Television::MAX_CHANNEL);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "TelevisionBuilder")]
pub struct Television {
    power: bool,
    muted: bool,
    volume: u8,
    channel: u8,
}

impl Television {
    pub const MIN_VOLUME: u8 = 0;
    pub const MAX_VOLUME: u8 = 2;
    pub const MIN_CHANNEL: u8 = 0;
    pub const MAX_CHANNEL: u8 = 3;

    const CHANNEL_COUNT: u8 = Self::MAX_CHANNEL + 1;

    /// Create a television that is off, unmuted, at minimum volume and on
    /// the first channel.
    pub fn new() -> Self {
        Self {
            power: false,
            muted: false,
            volume: Self::MIN_VOLUME,
            channel: Self::MIN_CHANNEL,
        }
    }

    /// Assemble a television from already validated settings.
    pub(crate) fn from_parts(power: bool, muted: bool, volume: u8, channel: u8) -> Self {
        debug_assert!((Self::MIN_VOLUME..=Self::MAX_VOLUME).contains(&volume));
        debug_assert!((Self::MIN_CHANNEL..=Self::MAX_CHANNEL).contains(&channel));
        Self {
            power,
            muted,
            volume,
            channel,
        }
    }

    /// The guard every control except power has to pass.
    pub fn power_gate() -> Guard<Television> {
        Guard::new(|tv: &Television| tv.power)
    }

    /// Flip the power. Works in either state.
    pub fn toggle_power(&mut self) {
        self.power = !self.power;
    }

    /// Flip mute while the set is on.
    pub fn toggle_mute(&mut self) {
        if self.power {
            self.muted = !self.muted;
        }
    }

    /// Next channel, wrapping from the last channel to the first.
    pub fn channel_up(&mut self) {
        if self.power {
            self.channel = (self.channel + 1) % Self::CHANNEL_COUNT;
        }
    }

    /// Previous channel, wrapping from the first channel to the last.
    pub fn channel_down(&mut self) {
        if self.power {
            // Adding the modulus keeps the operand non-negative.
            self.channel = (self.channel + Self::CHANNEL_COUNT - 1) % Self::CHANNEL_COUNT;
        }
    }

    /// Raise the volume by one step, unmuting first. Clamps at the maximum.
    pub fn volume_up(&mut self) {
        if self.power {
            self.muted = false;
            self.volume = (self.volume + 1).min(Self::MAX_VOLUME);
        }
    }

    /// Lower the volume by one step, unmuting first. Clamps at the minimum.
    pub fn volume_down(&mut self) {
        if self.power {
            self.muted = false;
            self.volume = self.volume.saturating_sub(1).max(Self::MIN_VOLUME);
        }
    }

    /// Textual dump: `Power = <bool>, Channel = <int>, Volume = <int>`.
    ///
    /// Booleans render as `true`/`false`. Mute is not part of the output.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn is_on(&self) -> bool {
        self.power
    }

    /// Mute flag. Kept while the set is off, but only meaningful while on.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Power = {}, Channel = {}, Volume = {}",
            self.power, self.channel, self.volume
        )
    }
}

impl State for Television {
    fn name(&self) -> &str {
        if self.power {
            "On"
        } else {
            "Off"
        }
    }
}
