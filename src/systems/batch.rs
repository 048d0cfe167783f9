//! Batch replay
//!
//! Classifies a recorded list of gestures in one call, used when replaying
//! gesture logs against new thresholds. Runs on rayon with the `parallel`
//! feature; output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::Serialize;

use crate::core::utils::clock::ReplayTimer;
use crate::domain::{GestureSample, ReadingDirection, SwipeThresholds};

use super::classify::{classify_detailed, Classification};

// Below this the rayon split costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_BATCH: usize = 256;

pub fn classify_batch(
    samples: &[GestureSample],
    thresholds: &SwipeThresholds,
    direction: ReadingDirection,
) -> Vec<Classification> {
    #[cfg(feature = "parallel")]
    {
        if samples.len() >= PARALLEL_MIN_BATCH {
            return samples
                .par_iter()
                .map(|s| classify_detailed(s, thresholds, direction))
                .collect();
        }
    }
    samples
        .iter()
        .map(|s| classify_detailed(s, thresholds, direction))
        .collect()
}

/// Aggregate counts of a replay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub total: usize,
    pub advance: usize,
    pub retreat: usize,
    pub rejected: usize,
    pub elapsed_ms: f64,
}

pub fn replay(
    samples: &[GestureSample],
    thresholds: &SwipeThresholds,
    direction: ReadingDirection,
) -> ReplaySummary {
    let timer = ReplayTimer::start();
    let results = classify_batch(samples, thresholds, direction);
    let mut summary = ReplaySummary {
        total: results.len(),
        ..ReplaySummary::default()
    };
    for result in &results {
        match result.code() {
            1 => summary.advance += 1,
            -1 => summary.retreat += 1,
            _ => summary.rejected += 1,
        }
    }
    summary.elapsed_ms = timer.elapsed_ms();
    tracing::debug!(
        total = summary.total,
        advance = summary.advance,
        retreat = summary.retreat,
        rejected = summary.rejected,
        "gesture replay finished"
    );
    summary
}
