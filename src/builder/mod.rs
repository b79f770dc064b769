//! Builder API for starting a television in a non-default state.
//!
//! `Television::new()` always starts off, unmuted, at the minimum volume and
//! channel. Embedding programs and test fixtures that need a different
//! starting point use [`TelevisionBuilder`], which validates every setting
//! and reports all violations together.

pub mod error;
pub mod television;

pub use error::{BuildError, SettingViolation};
pub use television::TelevisionBuilder;
