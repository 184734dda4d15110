//! Pattern registry for placeholder substitution
//!
//! Merges the embedded default pattern library with caller overrides into
//! the ordered binding list the engine compiles. Building a registry is a
//! pure function of its inputs: same overrides and caps, same ordered
//! bindings.

use crate::domain::{PatternConflict, PhiCategory, PlainsightError, Result};
use crate::generators::{SurrogateGenerator, SurrogateGenerators};
use serde::Deserialize;
use std::collections::HashMap;

/// One pattern bound to its category, generator, and optional cap
///
/// Created once per engine configuration; immutable thereafter.
#[derive(Debug, Clone)]
pub struct PatternBinding {
    /// PHI category this pattern belongs to
    pub category: PhiCategory,
    /// Regex source that matches the placeholder
    pub pattern: String,
    /// Routine invoked to produce the surrogate
    pub generator: SurrogateGenerator,
    /// Optional cap on replacements for this category per document
    pub max_per_document: Option<usize>,
}

/// Pattern definition entry in the TOML pattern library
#[derive(Debug, Deserialize)]
struct PatternDefinition {
    /// Regex patterns for this category
    patterns: Vec<String>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: HashMap<String, PatternDefinition>,
}

/// Ordered set of pattern bindings
#[derive(Debug)]
pub struct PatternRegistry {
    bindings: Vec<PatternBinding>,
}

impl PatternRegistry {
    /// Build a registry with the default patterns and generators
    pub fn with_defaults() -> Result<Self> {
        Self::build(None, None, &SurrogateGenerators::with_defaults())
    }

    /// Build a registry from defaults plus caller overrides
    ///
    /// An override for a category *replaces* that category's default
    /// patterns; categories absent from the override keep their defaults.
    /// Per-category pattern lists are deduplicated preserving first
    /// occurrence. Binding order follows category declaration order, then
    /// pattern list order, and decides alternation precedence in the
    /// engine.
    ///
    /// # Errors
    ///
    /// - [`PlainsightError::DuplicatePatterns`] when the same pattern
    ///   string ends up bound to two different categories; every
    ///   conflicting pair is listed and no partial registry is returned.
    /// - [`PlainsightError::MissingGenerator`] when a category has no
    ///   generator registered in `generators`.
    pub fn build(
        overrides: Option<&HashMap<PhiCategory, Vec<String>>>,
        max_per_document: Option<&HashMap<PhiCategory, usize>>,
        generators: &SurrogateGenerators,
    ) -> Result<Self> {
        let mut final_patterns: Vec<(PhiCategory, Vec<String>)> =
            Vec::with_capacity(PhiCategory::ALL.len());

        for (category, default_patterns) in default_pattern_sets()? {
            let source = match overrides.and_then(|o| o.get(&category)) {
                Some(custom) => custom.clone(),
                None => default_patterns,
            };
            final_patterns.push((category, dedup_preserving_order(source)));
        }

        check_cross_category_duplicates(final_patterns.iter().flat_map(
            |(category, patterns)| patterns.iter().map(move |p| (p.as_str(), *category)),
        ))?;

        let mut bindings = Vec::new();
        for (category, patterns) in final_patterns {
            let generator = generators.resolve(category)?;
            let cap = max_per_document.and_then(|m| m.get(&category)).copied();
            for pattern in patterns {
                bindings.push(PatternBinding {
                    category,
                    pattern,
                    generator,
                    max_per_document: cap,
                });
            }
        }

        Ok(Self { bindings })
    }

    /// Ordered bindings
    pub fn bindings(&self) -> &[PatternBinding] {
        &self.bindings
    }

    /// Consume the registry, yielding the ordered bindings
    pub fn into_bindings(self) -> Vec<PatternBinding> {
        self.bindings
    }
}

/// Reject pattern strings bound to more than one category.
///
/// Shared by registry building and the engine's defensive re-check so a
/// hand-assembled binding list fails exactly like a registry-built one.
/// Repeats within one category are harmless here; the registry
/// deduplicates them separately.
pub(crate) fn check_cross_category_duplicates<'a, I>(entries: I) -> Result<()>
where
    I: Iterator<Item = (&'a str, PhiCategory)>,
{
    let mut owner: HashMap<&str, PhiCategory> = HashMap::new();
    let mut conflicts: Vec<PatternConflict> = Vec::new();

    for (pattern, category) in entries {
        match owner.get(pattern) {
            Some(&first) if first != category => conflicts.push(PatternConflict {
                pattern: pattern.to_string(),
                first,
                second: category,
            }),
            Some(_) => {}
            None => {
                owner.insert(pattern, category);
            }
        }
    }

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(PlainsightError::DuplicatePatterns(conflicts))
    }
}

fn dedup_preserving_order(patterns: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        if !deduped.contains(&pattern) {
            deduped.push(pattern);
        }
    }
    deduped
}

/// Default patterns per category from the embedded library, in category
/// declaration order
fn default_pattern_sets() -> Result<Vec<(PhiCategory, Vec<String>)>> {
    let library: PatternLibrary = toml::from_str(include_str!("../../patterns/phi_patterns.toml"))?;

    let mut sets = Vec::with_capacity(PhiCategory::ALL.len());
    for category in PhiCategory::ALL {
        let def = library.patterns.get(category.label()).ok_or_else(|| {
            PlainsightError::Configuration(format!(
                "embedded pattern library has no entry for category '{category}'"
            ))
        })?;
        sets.push((category, def.patterns.clone()));
    }
    Ok(sets)
}
