//! The `State` trait implemented by machine states.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that describe a machine's current position.
///
/// All methods are pure. States are plain values that get cloned into
/// history records, so they must be cheap to clone and serializable.
///
/// # Example
///
/// ```rust
/// use television::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Input {
///     Antenna,
///     Hdmi,
///     Standby,
/// }
///
/// impl State for Input {
///     fn name(&self) -> &str {
///         match self {
///             Self::Antenna => "Antenna",
///             Self::Hdmi => "Hdmi",
///             Self::Standby => "Standby",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Standby)
///     }
/// }
///
/// assert_eq!(Input::Hdmi.name(), "Hdmi");
/// assert!(Input::Standby.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name for display and logging.
    fn name(&self) -> &str;

    /// Whether the machine has reached a terminal state.
    ///
    /// Defaults to `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Input {
        Antenna,
        Hdmi,
        Standby,
    }

    impl State for Input {
        fn name(&self) -> &str {
            match self {
                Self::Antenna => "Antenna",
                Self::Hdmi => "Hdmi",
                Self::Standby => "Standby",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Standby)
        }
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Idle;

    impl State for Idle {
        fn name(&self) -> &str {
            "Idle"
        }
    }

    #[test]
    fn name_returns_variant_name() {
        assert_eq!(Input::Antenna.name(), "Antenna");
        assert_eq!(Input::Hdmi.name(), "Hdmi");
        assert_eq!(Input::Standby.name(), "Standby");
    }

    #[test]
    fn is_final_can_be_overridden() {
        assert!(!Input::Antenna.is_final());
        assert!(!Input::Hdmi.is_final());
        assert!(Input::Standby.is_final());
    }

    #[test]
    fn is_final_defaults_to_false() {
        assert!(!Idle.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&Input::Hdmi).unwrap();
        let deserialized: Input = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Input::Hdmi);
    }
}
