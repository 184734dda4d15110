//! Core substitution logic
//!
//! The registry turns default patterns plus caller overrides into an
//! ordered binding list; the engine compiles that list into one combined
//! alternation and performs the substitution pass.

pub mod engine;
pub mod registry;

pub use engine::SubstitutionEngine;
pub use registry::{PatternBinding, PatternRegistry};
