use serde::{Deserialize, Serialize};

/// One measurement of a drag at release time.
///
/// Translations are in logical pixels from the gesture origin, velocity in
/// logical pixels per second, duration in milliseconds since the touch began.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureSample {
    pub translation_x: f64,
    pub translation_y: f64,
    pub velocity_x: f64,
    pub duration_ms: f64,
}

impl GestureSample {
    pub fn new(translation_x: f64, translation_y: f64, velocity_x: f64, duration_ms: f64) -> Self {
        Self {
            translation_x,
            translation_y,
            velocity_x,
            duration_ms,
        }
    }

    pub fn is_finite(&self) -> bool {
        all_finite!(
            self.translation_x,
            self.translation_y,
            self.velocity_x,
            self.duration_ms,
        )
    }

    pub fn horizontal_distance(&self) -> f64 {
        self.translation_x.abs()
    }

    pub fn vertical_distance(&self) -> f64 {
        self.translation_y.abs()
    }

    pub fn speed(&self) -> f64 {
        self.velocity_x.abs()
    }
}
