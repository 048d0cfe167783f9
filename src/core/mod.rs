//! Core helpers shared by the domain, systems and classifier layers.
//!
//! Macros live here so they are exported before any other module is parsed.

#[macro_use]
pub mod utils;
