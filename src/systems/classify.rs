use crate::domain::{map_direction, GestureSample, ReadingDirection, SemanticDirection, SwipeThresholds};

use super::swipe::{validate_swipe, SwipeVerdict};

/// Outcome of one gesture: the verdict, plus the direction when accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub verdict: SwipeVerdict,
    pub direction: Option<SemanticDirection>,
}

impl Classification {
    /// Signed code for the wasm boundary: 1 advance, -1 retreat, 0 no-op.
    pub fn code(&self) -> i8 {
        self.direction.map_or(0, SemanticDirection::code)
    }
}

pub fn classify_detailed(
    sample: &GestureSample,
    thresholds: &SwipeThresholds,
    direction: ReadingDirection,
) -> Classification {
    let verdict = validate_swipe(sample, thresholds);
    let direction = verdict
        .is_accept()
        .then(|| map_direction(sample.translation_x, direction));
    Classification { verdict, direction }
}

/// Validate then map. `None` means the gesture is a no-op.
pub fn classify(
    sample: &GestureSample,
    thresholds: &SwipeThresholds,
    direction: ReadingDirection,
) -> Option<SemanticDirection> {
    classify_detailed(sample, thresholds, direction).direction
}
