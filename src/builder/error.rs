//! Build errors for the television builder.

use thiserror::Error;

/// A single setting that falls outside the television's range.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingViolation {
    #[error("volume {value} is outside {min}..={max}")]
    VolumeOutOfRange { value: u8, min: u8, max: u8 },

    #[error("channel {value} is outside {min}..={max}")]
    ChannelOutOfRange { value: u8, min: u8, max: u8 },
}

/// Errors that can occur when building a television.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Every violation found, in field order.
    #[error("invalid television settings: {}", join_violations(.0))]
    InvalidSettings(Vec<SettingViolation>),
}

fn join_violations(violations: &[SettingViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
