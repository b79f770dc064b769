//! Remote buttons and their mapping onto television controls.

use crate::core::Television;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A button on the remote. Each maps to one television control.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Button {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Power,
        Button::Mute,
        Button::ChannelUp,
        Button::ChannelDown,
        Button::VolumeUp,
        Button::VolumeDown,
    ];

    /// Canonical lowercase label, also used as the history trigger.
    pub fn label(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Mute => "mute",
            Self::ChannelUp => "channel-up",
            Self::ChannelDown => "channel-down",
            Self::VolumeUp => "volume-up",
            Self::VolumeDown => "volume-down",
        }
    }

    /// Whether the button only works while the set is on.
    pub fn requires_power(self) -> bool {
        !matches!(self, Self::Power)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from parsing a button name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseButtonError {
    #[error("empty button name")]
    Empty,

    #[error("unknown button '{0}'")]
    Unknown(String),
}

impl FromStr for Button {
    type Err = ParseButtonError;

    /// Accepts the label, its snake_case form and a short alias
    /// (`pwr`, `ch+`, `ch-`, `vol+`, `vol-`), ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ParseButtonError::Empty);
        }

        match name.to_ascii_lowercase().as_str() {
            "power" | "pwr" => Ok(Self::Power),
            "mute" => Ok(Self::Mute),
            "channel-up" | "channel_up" | "ch+" => Ok(Self::ChannelUp),
            "channel-down" | "channel_down" | "ch-" => Ok(Self::ChannelDown),
            "volume-up" | "volume_up" | "vol+" => Ok(Self::VolumeUp),
            "volume-down" | "volume_down" | "vol-" => Ok(Self::VolumeDown),
            _ => Err(ParseButtonError::Unknown(name.to_string())),
        }
    }
}

impl Television {
    /// Run the control behind `button`.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::Power => self.toggle_power(),
            Button::Mute => self.toggle_mute(),
            Button::ChannelUp => self.channel_up(),
            Button::ChannelDown => self.channel_down(),
            Button::VolumeUp => self.volume_up(),
            Button::VolumeDown => self.volume_down(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for button in Button::ALL {
            assert_eq!(button.label().parse::<Button>(), Ok(button));
        }
    }

    #[test]
    fn aliases_and_case_are_accepted() {
        assert_eq!(" PWR ".parse::<Button>(), Ok(Button::Power));
        assert_eq!("Mute".parse::<Button>(), Ok(Button::Mute));
        assert_eq!("ch+".parse::<Button>(), Ok(Button::ChannelUp));
        assert_eq!("CHANNEL_DOWN".parse::<Button>(), Ok(Button::ChannelDown));
        assert_eq!("vol+".parse::<Button>(), Ok(Button::VolumeUp));
        assert_eq!("Vol-".parse::<Button>(), Ok(Button::VolumeDown));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!("".parse::<Button>(), Err(ParseButtonError::Empty));
        assert_eq!("   ".parse::<Button>(), Err(ParseButtonError::Empty));
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = " up ".parse::<Button>().unwrap_err();
        assert_eq!(err, ParseButtonError::Unknown("up".to_string()));
        assert_eq!(err.to_string(), "unknown button 'up'");
    }

    #[test]
    fn only_power_works_while_off() {
        let gated: Vec<Button> = Button::ALL
            .into_iter()
            .filter(|b| b.requires_power())
            .collect();
        assert_eq!(gated.len(), 5);
        assert!(!gated.contains(&Button::Power));
    }

    #[test]
    fn press_dispatches_to_controls() {
        let mut tv = Television::new();
        tv.press(Button::Power);
        tv.press(Button::ChannelDown);
        tv.press(Button::VolumeUp);
        tv.press(Button::Mute);

        assert!(tv.is_on());
        assert!(tv.is_muted());
        assert_eq!(tv.channel(), 3);
        assert_eq!(tv.volume(), 1);
    }

    #[test]
    fn button_serializes_as_label() {
        let json = serde_json::to_string(&Button::ChannelUp).unwrap();
        assert_eq!(json, r#""channel-up""#);
        let back: Button = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Button::ChannelUp);
    }
}
