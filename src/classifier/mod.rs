//! Classifier - owned classification state for one screen or host
//!
//! The systems layer is stateless. `ClassifierCore` keeps the pieces a host
//! holds between gestures: the reading direction chosen at startup, the
//! thresholds loaded from config, and running counters for diagnostics.
//! Nothing here changes the outcome of a classification.

use crate::domain::{GestureSample, ReadingDirection, SemanticDirection, SwipeThresholds, ThresholdsError};
use crate::systems::{classify_detailed, replay, Classification, ReplaySummary};

#[path = "stats/classify_stats.rs"]
mod classify_stats;
#[path = "settings/settings.rs"]
mod settings;
mod facade;

pub use classify_stats::ClassifyStats;
pub use facade::GestureClassifier;

pub struct ClassifierCore {
    direction: ReadingDirection,
    thresholds: SwipeThresholds,
    stats: ClassifyStats,
}

impl ClassifierCore {
    /// Classifier with the fallback thresholds.
    pub fn new(direction: ReadingDirection) -> Self {
        Self::with_thresholds(direction, SwipeThresholds::default())
    }

    pub fn with_thresholds(direction: ReadingDirection, thresholds: SwipeThresholds) -> Self {
        Self {
            direction,
            thresholds,
            stats: ClassifyStats::default(),
        }
    }

    pub fn direction(&self) -> ReadingDirection {
        self.direction
    }

    pub fn thresholds(&self) -> &SwipeThresholds {
        &self.thresholds
    }

    pub fn set_direction(&mut self, direction: ReadingDirection) {
        settings::set_direction(self, direction);
    }

    /// Replace the thresholds. Invalid thresholds are accepted here and make
    /// every later gesture reject; use `load_thresholds_json` to validate.
    pub fn set_thresholds(&mut self, thresholds: SwipeThresholds) {
        settings::set_thresholds(self, thresholds);
    }

    /// Parse, validate and install thresholds. On error the current
    /// thresholds stay in place.
    pub fn load_thresholds_json(&mut self, json: &str) -> Result<(), ThresholdsError> {
        settings::load_thresholds_json(self, json)
    }

    /// Classify one completed gesture. `None` is a no-op.
    pub fn classify(&mut self, sample: &GestureSample) -> Option<SemanticDirection> {
        self.classify_detailed(sample).direction
    }

    pub fn classify_detailed(&mut self, sample: &GestureSample) -> Classification {
        let result = classify_detailed(sample, &self.thresholds, self.direction);
        self.stats.record(&result);
        if let Some(reason) = result.verdict.reject_reason() {
            tracing::debug!(
                reason = reason.as_str(),
                translation_x = sample.translation_x,
                translation_y = sample.translation_y,
                velocity_x = sample.velocity_x,
                duration_ms = sample.duration_ms,
                "swipe rejected"
            );
        }
        result
    }

    /// Replay recorded gestures with the current settings. Does not touch
    /// the running stats.
    pub fn replay(&self, samples: &[GestureSample]) -> ReplaySummary {
        replay(samples, &self.thresholds, self.direction)
    }

    pub fn stats(&self) -> ClassifyStats {
        self.stats.clone()
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
