use crate::domain::{ReadingDirection, SwipeThresholds, ThresholdsError};

use super::ClassifierCore;

pub(super) fn set_direction(core: &mut ClassifierCore, direction: ReadingDirection) {
    if core.direction != direction {
        tracing::info!(direction = direction.as_str(), "reading direction changed");
    }
    core.direction = direction;
}

pub(super) fn set_thresholds(core: &mut ClassifierCore, thresholds: SwipeThresholds) {
    if !thresholds.is_valid() {
        tracing::warn!(?thresholds, "installed invalid swipe thresholds; all gestures will reject");
    }
    core.thresholds = thresholds;
}

pub(super) fn load_thresholds_json(core: &mut ClassifierCore, json: &str) -> Result<(), ThresholdsError> {
    let thresholds = SwipeThresholds::from_json(json)?;
    tracing::info!(
        min_distance = thresholds.min_distance,
        min_velocity = thresholds.min_velocity,
        min_duration_ms = thresholds.min_duration_ms,
        dominance_ratio = thresholds.dominance_ratio,
        "swipe thresholds loaded"
    );
    core.thresholds = thresholds;
    Ok(())
}
