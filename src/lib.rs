// Plainsight - PHI placeholder substitution for tagged clinical text
// Copyright (c) 2025 Plainsight Contributors
// Licensed under the MIT License

//! # Plainsight - PHI placeholder substitution
//!
//! Plainsight replaces structured placeholder tags in already-tagged Dutch
//! clinical text (literal tokens such as `<PERSOON>` or `<DATUM>`) with
//! synthetic, statistically plausible surrogate values, recording an
//! auditable mapping from each placeholder to the value that replaced it.
//!
//! It does not detect PHI in free text: upstream tagging is trusted to
//! have marked the spans, and Plainsight is the substitution and
//! generation engine behind it.
//!
//! ## Architecture
//!
//! - [`core`] - Pattern registry and the substitution engine
//! - [`generators`] - Probabilistic surrogate generators per PHI category
//! - [`domain`] - Category set, mapping records, and error types
//! - [`config`] - Configuration schema and loading
//! - [`audit`] - Audit trail with hashed originals
//! - [`logging`] - Structured logging setup
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use plainsight::core::SubstitutionEngine;
//!
//! fn main() -> plainsight::domain::Result<()> {
//!     let mut engine = SubstitutionEngine::with_defaults(Some(42))?;
//!     let result = engine.run("Patient <PERSOON> kwam op <DATUM>.", true);
//!
//!     println!("{}", result.text);
//!     for record in result.mapping.unwrap_or_default() {
//!         println!("{} -> {}", record.original, record.surrogate);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! Pattern overrides (full replacement per category), per-category
//! replacement caps, and the RNG seed come from a TOML file or are passed
//! programmatically through [`core::PatternRegistry::build`]:
//!
//! ```rust,no_run
//! use plainsight::config::PlainsightConfig;
//! use plainsight::core::SubstitutionEngine;
//!
//! # fn example() -> plainsight::domain::Result<()> {
//! let config = PlainsightConfig::from_file("plainsight.toml")?;
//! let engine = SubstitutionEngine::from_config(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! The engine owns its RNG. A seeded engine replays the same surrogates
//! for the same input; two engines never share random state, so separate
//! instances can run on separate threads without coordination.

pub mod audit;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod generators;
pub mod logging;

pub use crate::core::{PatternBinding, PatternRegistry, SubstitutionEngine};
pub use crate::domain::{AnonymizedText, MappingRecord, PhiCategory, PlainsightError};
