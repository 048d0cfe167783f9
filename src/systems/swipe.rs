//! Swipe validation
//!
//! Decides whether a completed drag is a deliberate horizontal swipe. Checks
//! run in a fixed order and the first failing one names the rejection:
//!
//! 1. inputs are finite and thresholds are valid
//! 2. the gesture is horizontal enough (`|dx| > |dy| * ratio`)
//! 3. it lasted longer than a tap
//! 4. distance or speed clears its primary threshold
//! 5. distance or speed clears its secondary floor
//!
//! Every comparison is on magnitudes, so growing `|dx|` or `|vx|` can only
//! turn a reject into an accept, never the other way round.

use serde::Serialize;

use crate::domain::{GestureSample, SwipeThresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    InvalidInput,
    InvalidThresholds,
    NotHorizontal,
    TooShort,
    BelowThreshold,
    TooSlow,
}

impl RejectReason {
    pub const ALL: [RejectReason; 6] = [
        RejectReason::InvalidInput,
        RejectReason::InvalidThresholds,
        RejectReason::NotHorizontal,
        RejectReason::TooShort,
        RejectReason::BelowThreshold,
        RejectReason::TooSlow,
    ];

    /// Stable code for the wasm boundary; 0 is reserved for "accepted".
    pub fn code(self) -> u8 {
        match self {
            RejectReason::InvalidInput => 1,
            RejectReason::InvalidThresholds => 2,
            RejectReason::NotHorizontal => 3,
            RejectReason::TooShort => 4,
            RejectReason::BelowThreshold => 5,
            RejectReason::TooSlow => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::InvalidInput => "invalid-input",
            RejectReason::InvalidThresholds => "invalid-thresholds",
            RejectReason::NotHorizontal => "not-horizontal",
            RejectReason::TooShort => "too-short",
            RejectReason::BelowThreshold => "below-threshold",
            RejectReason::TooSlow => "too-slow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "verdict", content = "reason")]
pub enum SwipeVerdict {
    Accept,
    Reject(RejectReason),
}

impl SwipeVerdict {
    pub fn is_accept(self) -> bool {
        matches!(self, SwipeVerdict::Accept)
    }

    pub fn reject_reason(self) -> Option<RejectReason> {
        match self {
            SwipeVerdict::Accept => None,
            SwipeVerdict::Reject(reason) => Some(reason),
        }
    }

    /// 0 for accept, otherwise [`RejectReason::code`].
    pub fn code(self) -> u8 {
        self.reject_reason().map_or(0, RejectReason::code)
    }
}

pub fn validate_swipe(sample: &GestureSample, thresholds: &SwipeThresholds) -> SwipeVerdict {
    if !sample.is_finite() {
        return SwipeVerdict::Reject(RejectReason::InvalidInput);
    }
    if !thresholds.is_valid() {
        return SwipeVerdict::Reject(RejectReason::InvalidThresholds);
    }

    let dx = sample.horizontal_distance();
    let dy = sample.vertical_distance();
    let speed = sample.speed();

    if dx <= dy * thresholds.dominance_ratio {
        return SwipeVerdict::Reject(RejectReason::NotHorizontal);
    }
    if sample.duration_ms <= thresholds.min_duration_ms {
        return SwipeVerdict::Reject(RejectReason::TooShort);
    }
    if dx <= thresholds.min_distance && speed <= thresholds.min_velocity {
        return SwipeVerdict::Reject(RejectReason::BelowThreshold);
    }
    if dx < thresholds.floor_distance && speed < thresholds.floor_velocity {
        return SwipeVerdict::Reject(RejectReason::TooSlow);
    }

    SwipeVerdict::Accept
}

/// Boolean form of [`validate_swipe`].
#[inline]
pub fn is_swipe(sample: &GestureSample, thresholds: &SwipeThresholds) -> bool {
    validate_swipe(sample, thresholds).is_accept()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> SwipeThresholds {
        SwipeThresholds::new(100.0, 800.0, 100.0, 1.5)
    }

    #[test]
    fn distance_swipe_is_accepted() {
        let sample = GestureSample::new(150.0, 20.0, 200.0, 300.0);
        assert_eq!(validate_swipe(&sample, &reference()), SwipeVerdict::Accept);
    }

    #[test]
    fn short_slow_drag_is_below_threshold() {
        let sample = GestureSample::new(30.0, 10.0, 50.0, 600.0);
        assert_eq!(
            validate_swipe(&sample, &reference()),
            SwipeVerdict::Reject(RejectReason::BelowThreshold)
        );
    }

    #[test]
    fn fast_flick_passes_on_velocity_alone() {
        let sample = GestureSample::new(-40.0, 5.0, -1200.0, 150.0);
        assert!(is_swipe(&sample, &reference()));
    }

    #[test]
    fn vertical_drag_is_not_horizontal() {
        let sample = GestureSample::new(0.0, 100.0, 5000.0, 300.0);
        assert_eq!(
            validate_swipe(&sample, &reference()),
            SwipeVerdict::Reject(RejectReason::NotHorizontal)
        );
    }

    #[test]
    fn zero_motion_is_not_horizontal() {
        let sample = GestureSample::new(0.0, 0.0, 0.0, 300.0);
        assert_eq!(
            validate_swipe(&sample, &reference()).reject_reason(),
            Some(RejectReason::NotHorizontal)
        );
    }

    #[test]
    fn tap_length_gesture_is_too_short() {
        let sample = GestureSample::new(400.0, 0.0, 3000.0, 100.0);
        assert_eq!(
            validate_swipe(&sample, &reference()),
            SwipeVerdict::Reject(RejectReason::TooShort)
        );
    }

    #[test]
    fn secondary_floor_rejects_drift() {
        // Primary thresholds at zero so only the floors can reject.
        let thresholds = SwipeThresholds::new(0.0, 0.0, 0.0, 1.0).with_floors(20.0, 150.0);
        let drift = GestureSample::new(10.0, 0.0, 40.0, 900.0);
        assert_eq!(
            validate_swipe(&drift, &thresholds),
            SwipeVerdict::Reject(RejectReason::TooSlow)
        );
        let flick = GestureSample::new(10.0, 0.0, 400.0, 900.0);
        assert!(is_swipe(&flick, &thresholds));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        for sample in [
            GestureSample::new(f64::NAN, 0.0, 900.0, 300.0),
            GestureSample::new(150.0, f64::INFINITY, 900.0, 300.0),
            GestureSample::new(150.0, 0.0, f64::NEG_INFINITY, 300.0),
            GestureSample::new(150.0, 0.0, 900.0, f64::NAN),
        ] {
            assert_eq!(
                validate_swipe(&sample, &reference()),
                SwipeVerdict::Reject(RejectReason::InvalidInput)
            );
        }
    }

    #[test]
    fn broken_thresholds_reject_everything() {
        let thresholds = SwipeThresholds {
            dominance_ratio: f64::NAN,
            ..reference()
        };
        let sample = GestureSample::new(500.0, 0.0, 5000.0, 300.0);
        assert_eq!(
            validate_swipe(&sample, &thresholds),
            SwipeVerdict::Reject(RejectReason::InvalidThresholds)
        );
    }

    #[test]
    fn verdict_codes() {
        assert_eq!(SwipeVerdict::Accept.code(), 0);
        let codes: Vec<u8> = RejectReason::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
    }
}
