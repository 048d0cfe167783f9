//! RTL diagnostics report
//!
//! Snapshot of everything the RTL layer decides for the current direction,
//! plus the verdicts for a fixed set of probe gestures. Rendered to JSON so
//! the host can show it on a debug screen or attach it to a bug report.

use serde::Serialize;

use crate::core::utils::clock::now_ms;
use crate::domain::{GestureSample, ReadingDirection, SemanticDirection, SwipeThresholds};
use crate::systems::layout::{
    chevron_for, resolve_edge, row_direction, text_align_start, Chevron, FlexDirection,
    HorizontalEdge, TextAlign,
};
use crate::systems::{classify_detailed, SwipeVerdict};

/// Named gestures every report classifies.
pub const PROBES: [(&str, GestureSample); 5] = [
    ("right-drag", GestureSample { translation_x: 200.0, translation_y: 10.0, velocity_x: 900.0, duration_ms: 250.0 }),
    ("left-drag", GestureSample { translation_x: -200.0, translation_y: 10.0, velocity_x: -900.0, duration_ms: 250.0 }),
    ("vertical-drag", GestureSample { translation_x: 5.0, translation_y: 200.0, velocity_x: 50.0, duration_ms: 300.0 }),
    ("tap", GestureSample { translation_x: 2.0, translation_y: 1.0, velocity_x: 0.0, duration_ms: 40.0 }),
    ("slow-drag", GestureSample { translation_x: 15.0, translation_y: 2.0, velocity_x: 30.0, duration_ms: 1200.0 }),
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub name: &'static str,
    pub sample: GestureSample,
    pub verdict: SwipeVerdict,
    pub direction: Option<SemanticDirection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RtlDiagnostics {
    pub generated_at_ms: f64,
    pub direction: ReadingDirection,
    pub start_edge: HorizontalEdge,
    pub row_direction: FlexDirection,
    pub text_align: TextAlign,
    pub advance_chevron: Chevron,
    pub thresholds: SwipeThresholds,
    pub thresholds_valid: bool,
    pub probes: Vec<ProbeResult>,
}

impl RtlDiagnostics {
    pub fn collect(direction: ReadingDirection, thresholds: &SwipeThresholds) -> Self {
        let probes = PROBES
            .iter()
            .map(|&(name, sample)| {
                let result = classify_detailed(&sample, thresholds, direction);
                ProbeResult {
                    name,
                    sample,
                    verdict: result.verdict,
                    direction: result.direction,
                }
            })
            .collect();

        Self {
            generated_at_ms: now_ms(),
            direction,
            start_edge: resolve_edge(HorizontalEdge::Start, direction),
            row_direction: row_direction(direction),
            text_align: text_align_start(direction),
            advance_chevron: chevron_for(SemanticDirection::Advance, direction),
            thresholds: *thresholds,
            thresholds_valid: thresholds.is_valid(),
            probes,
        }
    }

    pub fn probe(&self, name: &str) -> Option<&ProbeResult> {
        self.probes.iter().find(|p| p.name == name)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
