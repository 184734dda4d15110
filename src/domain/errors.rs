//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types,
//! except for the regex compilation source which callers legitimately
//! want to inspect.

use crate::domain::category::PhiCategory;
use thiserror::Error;

/// A cross-category pattern collision detected while building a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConflict {
    /// The colliding pattern string
    pub pattern: String,
    /// Category the pattern was first bound to
    pub first: PhiCategory,
    /// Category that tried to bind the same pattern
    pub second: PhiCategory,
}

impl std::fmt::Display for PatternConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "pattern {:?} used for both '{}' and '{}'",
            self.pattern, self.first, self.second
        )
    }
}

/// Main Plainsight error type
#[derive(Debug, Error)]
pub enum PlainsightError {
    /// The same pattern string is bound to more than one PHI category.
    /// Carries every conflicting pair, not just the first one found.
    #[error(
        "duplicate regex pattern strings across PHI categories are not allowed:\n{}",
        format_conflicts(.0)
    )]
    DuplicatePatterns(Vec<PatternConflict>),

    /// A category has no surrogate generator registered for it
    #[error("no surrogate generator registered for PHI category '{0}'")]
    MissingGenerator(PhiCategory),

    /// A user-supplied or default pattern failed to compile
    #[error("invalid regex pattern {pattern:?} for category '{category}'")]
    InvalidPattern {
        category: PhiCategory,
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Configuration-related errors (files, keys, values)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

fn format_conflicts(conflicts: &[PatternConflict]) -> String {
    conflicts
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

// Conversion from std::io::Error
impl From<std::io::Error> for PlainsightError {
    fn from(err: std::io::Error) -> Self {
        PlainsightError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PlainsightError {
    fn from(err: serde_json::Error) -> Self {
        PlainsightError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PlainsightError {
    fn from(err: toml::de::Error) -> Self {
        PlainsightError::Configuration(format!("TOML parse error: {err}"))
    }
}
