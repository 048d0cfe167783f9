use wasm_bindgen::prelude::*;

use crate::diagnostics::RtlDiagnostics;
use crate::domain::{GestureSample, ReadingDirection, SemanticDirection};
use crate::systems::validate_swipe;

use super::classify_stats::ClassifyStats;
use super::ClassifierCore;

/// JS-facing classifier. The host gesture handler calls `classify` once per
/// released drag and acts on the returned code.
#[wasm_bindgen]
pub struct GestureClassifier {
    core: ClassifierCore,
}

#[wasm_bindgen]
impl GestureClassifier {
    /// Create a classifier with the fallback thresholds
    #[wasm_bindgen(constructor)]
    pub fn new(rtl: bool) -> Self {
        Self {
            core: ClassifierCore::new(ReadingDirection::from_rtl_flag(rtl)),
        }
    }

    #[wasm_bindgen(js_name = fromLocale)]
    pub fn from_locale(locale: &str) -> Self {
        Self {
            core: ClassifierCore::new(ReadingDirection::from_locale(locale)),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn rtl(&self) -> bool { self.core.direction().is_rtl() }

    pub fn set_rtl(&mut self, rtl: bool) {
        self.core.set_direction(ReadingDirection::from_rtl_flag(rtl));
    }

    pub fn load_thresholds(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_thresholds_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn thresholds_json(&self) -> String {
        self.core.thresholds().to_json()
    }

    /// 1 = advance, -1 = retreat, 0 = not a swipe
    pub fn classify(&mut self, translation_x: f64, translation_y: f64, velocity_x: f64, duration_ms: f64) -> i8 {
        let sample = GestureSample::new(translation_x, translation_y, velocity_x, duration_ms);
        self.core.classify_detailed(&sample).code()
    }

    /// 0 when the gesture would be accepted, otherwise the rejection code.
    /// Does not update stats.
    pub fn reject_reason(&self, translation_x: f64, translation_y: f64, velocity_x: f64, duration_ms: f64) -> u8 {
        let sample = GestureSample::new(translation_x, translation_y, velocity_x, duration_ms);
        validate_swipe(&sample, self.core.thresholds()).code()
    }

    /// Move a pager index one step in the direction of `code` (from `classify`).
    pub fn step_index(&self, current: usize, len: usize, code: i8) -> usize {
        match code {
            1 => SemanticDirection::Advance.step_index(current, len),
            -1 => SemanticDirection::Retreat.step_index(current, len),
            _ => current,
        }
    }

    /// Replay a JSON array of recorded samples; returns the summary as JSON.
    /// Does not update stats.
    pub fn replay_json(&self, samples_json: String) -> Result<String, JsValue> {
        let samples: Vec<GestureSample> =
            serde_json::from_str(&samples_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let summary = self.core.replay(&samples);
        serde_json::to_string(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn stats(&self) -> ClassifyStats {
        self.core.stats()
    }

    pub fn reset_stats(&mut self) {
        self.core.reset_stats();
    }

    pub fn diagnostics_json(&self) -> String {
        RtlDiagnostics::collect(self.core.direction(), self.core.thresholds()).to_json()
    }

    /// DEBUG: dump the diagnostics report to the browser console
    pub fn log_diagnostics(&self) {
        web_sys::console::log_1(&self.diagnostics_json().into());
    }
}
