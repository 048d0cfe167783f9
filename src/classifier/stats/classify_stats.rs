use wasm_bindgen::prelude::*;

use crate::domain::SemanticDirection;
use crate::systems::{Classification, RejectReason};

/// Running counters since construction or the last reset.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifyStats {
    pub(super) total: u32,
    pub(super) advance: u32,
    pub(super) retreat: u32,
    pub(super) rejected_invalid_input: u32,
    pub(super) rejected_invalid_thresholds: u32,
    pub(super) rejected_not_horizontal: u32,
    pub(super) rejected_too_short: u32,
    pub(super) rejected_below_threshold: u32,
    pub(super) rejected_too_slow: u32,
}

impl ClassifyStats {
    pub(crate) fn record(&mut self, result: &Classification) {
        self.total = self.total.saturating_add(1);
        match (result.direction, result.verdict.reject_reason()) {
            (Some(SemanticDirection::Advance), _) => self.advance = self.advance.saturating_add(1),
            (Some(SemanticDirection::Retreat), _) => self.retreat = self.retreat.saturating_add(1),
            (None, Some(reason)) => {
                let slot = self.rejected_slot(reason);
                *slot = slot.saturating_add(1);
            }
            (None, None) => {}
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = ClassifyStats::default();
    }

    pub fn rejected_by(&self, reason: RejectReason) -> u32 {
        match reason {
            RejectReason::InvalidInput => self.rejected_invalid_input,
            RejectReason::InvalidThresholds => self.rejected_invalid_thresholds,
            RejectReason::NotHorizontal => self.rejected_not_horizontal,
            RejectReason::TooShort => self.rejected_too_short,
            RejectReason::BelowThreshold => self.rejected_below_threshold,
            RejectReason::TooSlow => self.rejected_too_slow,
        }
    }

    fn rejected_slot(&mut self, reason: RejectReason) -> &mut u32 {
        match reason {
            RejectReason::InvalidInput => &mut self.rejected_invalid_input,
            RejectReason::InvalidThresholds => &mut self.rejected_invalid_thresholds,
            RejectReason::NotHorizontal => &mut self.rejected_not_horizontal,
            RejectReason::TooShort => &mut self.rejected_too_short,
            RejectReason::BelowThreshold => &mut self.rejected_below_threshold,
            RejectReason::TooSlow => &mut self.rejected_too_slow,
        }
    }
}

#[wasm_bindgen]
impl ClassifyStats {
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 { self.total }
    #[wasm_bindgen(getter)]
    pub fn advance(&self) -> u32 { self.advance }
    #[wasm_bindgen(getter)]
    pub fn retreat(&self) -> u32 { self.retreat }
    #[wasm_bindgen(getter)]
    pub fn accepted(&self) -> u32 { self.advance.saturating_add(self.retreat) }
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> u32 { self.total.saturating_sub(self.accepted()) }

    #[wasm_bindgen(getter)]
    pub fn rejected_invalid_input(&self) -> u32 { self.rejected_invalid_input }
    #[wasm_bindgen(getter)]
    pub fn rejected_invalid_thresholds(&self) -> u32 { self.rejected_invalid_thresholds }
    #[wasm_bindgen(getter)]
    pub fn rejected_not_horizontal(&self) -> u32 { self.rejected_not_horizontal }
    #[wasm_bindgen(getter)]
    pub fn rejected_too_short(&self) -> u32 { self.rejected_too_short }
    #[wasm_bindgen(getter)]
    pub fn rejected_below_threshold(&self) -> u32 { self.rejected_below_threshold }
    #[wasm_bindgen(getter)]
    pub fn rejected_too_slow(&self) -> u32 { self.rejected_too_slow }
}
