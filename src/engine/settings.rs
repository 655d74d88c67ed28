//! Retunable blend parameters.

use std::f32::consts::PI;

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{
    CAMERA_SHAKE_DECAY, CAMERA_SHAKE_THRESHOLD, CAMERA_TRACKING_RATE, FINGER_CURL_RATE,
    FINGER_RELAX_RATE, MAX_RECOIL, RECOIL_DAMPING, RECOIL_SPRING_RETURN, STIFFNESS,
};

/// Errors raised while loading [`BlendSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The input was not valid JSON for the settings shape.
    #[error("invalid blend settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but lies outside its usable range.
    #[error("`{field}` must lie in {min}..={max}, got {value}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Value supplied.
        value: f32,
        /// Smallest accepted value.
        min: f32,
        /// Largest accepted value.
        max: f32,
    },
}

/// Per-tick rates the engine blends with.
///
/// Missing JSON fields take their defaults, so a tuning file only has to
/// name what it changes:
///
/// ```
/// use sparring::engine::BlendSettings;
/// let settings = BlendSettings::from_json_str(r#"{ "stiffness": 0.05 }"#)
///     .expect("valid settings");
/// assert_eq!(settings.stiffness, 0.05);
/// assert_eq!(settings.recoil_damping, BlendSettings::default().recoil_damping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlendSettings {
    /// Fraction of the remaining distance each joint covers per tick.
    pub stiffness: f32,
    /// Multiplier applied to recoil velocity each tick.
    pub recoil_damping: f32,
    /// Fraction of the recoil offset pulled back to rest each tick.
    pub spring_return: f32,
    /// Per-axis bound on the recoil offset, in radians.
    pub max_recoil: f32,
    /// Geometric decay of camera shake.
    pub shake_decay: f32,
    /// Shake magnitude below which the camera settles.
    pub shake_threshold: f32,
    /// Approach rate of fingers returning to rest.
    pub finger_relax_rate: f32,
    /// Approach rate of fingers curling into a fist.
    pub finger_curl_rate: f32,
    /// Approach rate of the camera target following the body.
    pub camera_tracking_rate: f32,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            stiffness: STIFFNESS,
            recoil_damping: RECOIL_DAMPING,
            spring_return: RECOIL_SPRING_RETURN,
            max_recoil: MAX_RECOIL,
            shake_decay: CAMERA_SHAKE_DECAY,
            shake_threshold: CAMERA_SHAKE_THRESHOLD,
            finger_relax_rate: FINGER_RELAX_RATE,
            finger_curl_rate: FINGER_CURL_RATE,
            camera_tracking_rate: CAMERA_TRACKING_RATE,
        }
    }
}

impl BlendSettings {
    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] for malformed JSON or unknown fields,
    /// and [`SettingsError::OutOfRange`] for values the engine cannot use.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every rate lies where the integration stays stable.
    ///
    /// # Errors
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let checks: [(&'static str, f32, f32, f32); 9] = [
            ("stiffness", self.stiffness, f32::EPSILON, 1.0),
            ("recoil_damping", self.recoil_damping, 0.0, 1.0),
            ("spring_return", self.spring_return, 0.0, 1.0),
            ("max_recoil", self.max_recoil, f32::EPSILON, PI),
            ("shake_decay", self.shake_decay, 0.0, 0.99),
            ("shake_threshold", self.shake_threshold, 0.0, 1.0),
            ("finger_relax_rate", self.finger_relax_rate, 0.0, 1.0),
            ("finger_curl_rate", self.finger_curl_rate, 0.0, 1.0),
            ("camera_tracking_rate", self.camera_tracking_rate, 0.0, 1.0),
        ];
        for (field, value, min, max) in checks {
            if !(min..=max).contains(&value) {
                return Err(SettingsError::OutOfRange {
                    field,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_validate() {
        assert!(BlendSettings::default().validate().is_ok());
    }

    #[rstest]
    #[case::zero_stiffness(r#"{ "stiffness": 0.0 }"#, "stiffness")]
    #[case::runaway_damping(r#"{ "recoil_damping": 1.5 }"#, "recoil_damping")]
    #[case::nan_free_recoil(r#"{ "max_recoil": 4.0 }"#, "max_recoil")]
    fn out_of_range_fields_are_named(#[case] json: &str, #[case] expected: &str) {
        match BlendSettings::from_json_str(json) {
            Err(SettingsError::OutOfRange { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected OutOfRange for {expected}, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            BlendSettings::from_json_str(r#"{ "stifness": 0.1 }"#),
            Err(SettingsError::Parse(_))
        ));
    }
}
