//! Fluent builder for televisions.

use crate::builder::error::{BuildError, SettingViolation};
use crate::core::Television;
use serde::Deserialize;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for a television with explicit starting settings.
///
/// Unset fields keep the defaults of [`Television::new`]. Deserializing a
/// `Television` also goes through this builder, so out-of-range values are
/// rejected there too.
///
/// # Example
///
/// ```rust
/// use television::TelevisionBuilder;
///
/// let tv = TelevisionBuilder::new()
///     .powered(true)
///     .channel(3)
///     .volume(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(tv.describe(), "Power = true, Channel = 3, Volume = 2");
///
/// let err = TelevisionBuilder::new().volume(5).channel(9).build().unwrap_err();
/// assert!(err.to_string().contains("volume 5"));
/// assert!(err.to_string().contains("channel 9"));
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TelevisionBuilder {
    power: bool,
    muted: bool,
    volume: u8,
    channel: u8,
}

type SettingCheck = Validation<(), NonEmptyVec<SettingViolation>>;

impl TelevisionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start powered on or off.
    pub fn powered(mut self, on: bool) -> Self {
        self.power = on;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.volume = volume;
        self
    }

    pub fn channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Build the television.
    /// Returns every out-of-range setting, not just the first.
    pub fn build(self) -> Result<Television, BuildError> {
        match self.validate() {
            Validation::Success(_) => Ok(Television::from_parts(
                self.power,
                self.muted,
                self.volume,
                self.channel,
            )),
            Validation::Failure(violations) => Err(BuildError::InvalidSettings(
                violations.iter().cloned().collect(),
            )),
        }
    }

    fn validate(&self) -> SettingCheck {
        let checks = vec![self.check_volume(), self.check_channel()];
        Validation::all_vec(checks).map(|_| ())
    }

    fn check_volume(&self) -> SettingCheck {
        let (min, max) = (Television::MIN_VOLUME, Television::MAX_VOLUME);
        if (min..=max).contains(&self.volume) {
            Validation::success(())
        } else {
            Validation::fail(SettingViolation::VolumeOutOfRange {
                value: self.volume,
                min,
                max,
            })
        }
    }

    fn check_channel(&self) -> SettingCheck {
        let (min, max) = (Television::MIN_CHANNEL, Television::MAX_CHANNEL);
        if (min..=max).contains(&self.channel) {
            Validation::success(())
        } else {
            Validation::fail(SettingViolation::ChannelOutOfRange {
                value: self.channel,
                min,
                max,
            })
        }
    }
}

impl TryFrom<TelevisionBuilder> for Television {
    type Error = BuildError;

    fn try_from(builder: TelevisionBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_matches_new() {
        let tv = TelevisionBuilder::new().build().unwrap();
        assert_eq!(tv, Television::new());
    }

    #[test]
    fn builder_sets_every_field() {
        let tv = TelevisionBuilder::new()
            .powered(true)
            .muted(true)
            .volume(1)
            .channel(2)
            .build()
            .unwrap();

        assert!(tv.is_on());
        assert!(tv.is_muted());
        assert_eq!(tv.volume(), 1);
        assert_eq!(tv.channel(), 2);
    }

    #[test]
    fn builder_accepts_bounds() {
        let tv = TelevisionBuilder::new()
            .volume(Television::MAX_VOLUME)
            .channel(Television::MAX_CHANNEL)
            .build()
            .unwrap();

        assert_eq!(tv.volume(), Television::MAX_VOLUME);
        assert_eq!(tv.channel(), Television::MAX_CHANNEL);
    }

    #[test]
    fn volume_out_of_range_is_rejected() {
        let err = TelevisionBuilder::new().volume(3).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidSettings(vec![SettingViolation::VolumeOutOfRange {
                value: 3,
                min: 0,
                max: 2,
            }])
        );
    }

    #[test]
    fn channel_out_of_range_is_rejected() {
        let err = TelevisionBuilder::new().channel(4).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::InvalidSettings(vec![SettingViolation::ChannelOutOfRange {
                value: 4,
                min: 0,
                max: 3,
            }])
        );
    }

    #[test]
    fn builder_accumulates_all_violations() {
        let err = TelevisionBuilder::new()
            .powered(true)
            .volume(200)
            .channel(10)
            .build()
            .unwrap_err();

        let BuildError::InvalidSettings(violations) = err;
        assert_eq!(violations.len(), 2);
        assert!(violations
            .iter()
            .any(|v| matches!(v, SettingViolation::VolumeOutOfRange { value: 200, .. })));
        assert!(violations
            .iter()
            .any(|v| matches!(v, SettingViolation::ChannelOutOfRange { value: 10, .. })));
    }

    #[test]
    fn try_from_uses_validation() {
        let ok = Television::try_from(TelevisionBuilder::new().channel(1));
        assert_eq!(ok.map(|tv| tv.channel()), Ok(1));

        let err = Television::try_from(TelevisionBuilder::new().volume(7));
        assert!(err.is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let tv: Television = serde_json::from_str(r#"{"power":true}"#).unwrap();
        assert!(tv.is_on());
        assert_eq!(tv.volume(), Television::MIN_VOLUME);
        assert_eq!(tv.channel(), Television::MIN_CHANNEL);
    }
}
