//! RTL Gesture Engine - swipe classification for right-to-left screens
//!
//! Turns a released horizontal drag into "advance", "retreat" or nothing,
//! independent of whether the app is laid out LTR or RTL.
//!
//! Architecture:
//! - core/        - Shared macros and clock
//! - domain/      - Gesture samples, directions, thresholds
//! - systems/     - Stateless classifiers and layout mirroring
//! - classifier/  - Owned state + wasm facade for the JS host
//! - diagnostics  - RTL diagnostics report

// Macros first so every later module can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod classifier;
pub mod diagnostics;

pub use classifier::{ClassifierCore, ClassifyStats, GestureClassifier};
pub use diagnostics::RtlDiagnostics;
pub use domain::{
    effective_translation, map_direction, GestureSample, ReadingDirection, SemanticDirection,
    SwipeThresholds, ThresholdsError,
};
pub use systems::{classify, classify_batch, validate_swipe, RejectReason, SwipeVerdict};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"RTL gesture engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 1 when the locale reads right-to-left, 0 otherwise
#[wasm_bindgen]
pub fn reading_direction_from_locale(locale: &str) -> u8 {
    ReadingDirection::from_locale(locale).is_rtl() as u8
}

// Classification codes for JS
#[wasm_bindgen]
pub fn dir_advance() -> i8 { SemanticDirection::Advance.code() }
#[wasm_bindgen]
pub fn dir_retreat() -> i8 { SemanticDirection::Retreat.code() }
#[wasm_bindgen]
pub fn dir_none() -> i8 { 0 }
