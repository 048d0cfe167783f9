//! Domain types: gesture samples, directions and thresholds.

pub mod direction;
pub mod gesture;
pub mod thresholds;

pub use direction::{effective_translation, map_direction, ReadingDirection, SemanticDirection};
pub use gesture::GestureSample;
pub use thresholds::{SwipeThresholds, ThresholdsError};
