//! Systems - stateless classifiers built on the domain types
//!
//! - swipe/    - accept/reject a completed drag
//! - classify/ - validate then map to a semantic direction
//! - batch/    - replay recorded gestures (rayon when `parallel`)
//! - layout/   - horizontal mirroring helpers for RTL screens

pub mod batch;
pub mod classify;
pub mod layout;
pub mod swipe;

pub use batch::{classify_batch, replay, ReplaySummary};
pub use classify::{classify, classify_detailed, Classification};
pub use swipe::{is_swipe, validate_swipe, RejectReason, SwipeVerdict};
