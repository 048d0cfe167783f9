//! Swipe thresholds
//!
//! Loaded from the same JSON the JS host keeps next to its gesture handlers.
//! Keys are camelCase; missing keys fall back to [`SwipeThresholds::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdsError {
    #[error("invalid thresholds json: {0}")]
    Parse(String),
    #[error("threshold `{0}` is not a finite number")]
    NotFinite(&'static str),
    #[error("threshold `{0}` must not be negative")]
    Negative(&'static str),
    #[error("dominanceRatio must be greater than zero, got {0}")]
    NonPositiveRatio(f64),
}

/// Caller-supplied acceptance thresholds for a horizontal swipe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SwipeThresholds {
    /// Horizontal distance (px) that on its own makes a swipe.
    pub min_distance: f64,
    /// Horizontal speed (px/s) that on its own makes a swipe.
    pub min_velocity: f64,
    /// Gestures at or under this duration are taps.
    pub min_duration_ms: f64,
    /// |dx| must exceed |dy| times this ratio.
    pub dominance_ratio: f64,
    /// Secondary floors: one of them must be met so a slow drift never counts.
    pub floor_distance: f64,
    pub floor_velocity: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            min_velocity: 500.0,
            min_duration_ms: 80.0,
            dominance_ratio: 1.5,
            floor_distance: 20.0,
            floor_velocity: 150.0,
        }
    }
}

impl SwipeThresholds {
    /// Thresholds with the four primary values set and the floors left at
    /// their defaults.
    pub fn new(min_distance: f64, min_velocity: f64, min_duration_ms: f64, dominance_ratio: f64) -> Self {
        Self {
            min_distance,
            min_velocity,
            min_duration_ms,
            dominance_ratio,
            ..Self::default()
        }
    }

    pub fn with_floors(mut self, floor_distance: f64, floor_velocity: f64) -> Self {
        self.floor_distance = floor_distance;
        self.floor_velocity = floor_velocity;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ThresholdsError> {
        let thresholds: SwipeThresholds =
            serde_json::from_str(json).map_err(|e| ThresholdsError::Parse(e.to_string()))?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ThresholdsError> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(ThresholdsError::NotFinite(name));
            }
            if value < 0.0 {
                return Err(ThresholdsError::Negative(name));
            }
        }
        if self.dominance_ratio <= 0.0 {
            return Err(ThresholdsError::NonPositiveRatio(self.dominance_ratio));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn named_values(&self) -> [(&'static str, f64); 6] {
        [
            ("minDistance", self.min_distance),
            ("minVelocity", self.min_velocity),
            ("minDurationMs", self.min_duration_ms),
            ("dominanceRatio", self.dominance_ratio),
            ("floorDistance", self.floor_distance),
            ("floorVelocity", self.floor_velocity),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let t = SwipeThresholds::from_json(r#"{"minDistance": 100, "minVelocity": 800}"#).unwrap();
        assert_eq!(t.min_distance, 100.0);
        assert_eq!(t.min_velocity, 800.0);
        assert_eq!(t.min_duration_ms, SwipeThresholds::default().min_duration_ms);
        assert_eq!(t.dominance_ratio, 1.5);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(SwipeThresholds::from_json("{}").unwrap(), SwipeThresholds::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = SwipeThresholds::from_json(r#"{"minDistanse": 10}"#).unwrap_err();
        assert!(matches!(err, ThresholdsError::Parse(_)));
    }

    #[test]
    fn negative_and_zero_ratio_are_rejected() {
        assert_eq!(
            SwipeThresholds::from_json(r#"{"floorVelocity": -1}"#).unwrap_err(),
            ThresholdsError::Negative("floorVelocity")
        );
        assert_eq!(
            SwipeThresholds::from_json(r#"{"dominanceRatio": 0}"#).unwrap_err(),
            ThresholdsError::NonPositiveRatio(0.0)
        );
    }

    #[test]
    fn non_finite_values_fail_validation() {
        let t = SwipeThresholds {
            min_velocity: f64::INFINITY,
            ..SwipeThresholds::default()
        };
        assert_eq!(t.validate(), Err(ThresholdsError::NotFinite("minVelocity")));
        assert!(!t.is_valid());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = SwipeThresholds::new(100.0, 800.0, 100.0, 1.5).to_json();
        assert!(json.contains("\"minDurationMs\":100.0"));
        assert_eq!(SwipeThresholds::from_json(&json).unwrap().min_velocity, 800.0);
    }
}
