//! Substitution engine
//!
//! Compiles the ordered pattern bindings into one combined alternation and
//! replaces placeholder tags with generated surrogates in a single linear
//! pass.
//!
//! # Examples
//!
//! ```
//! use plainsight::core::SubstitutionEngine;
//!
//! # fn example() -> plainsight::domain::Result<()> {
//! let mut engine = SubstitutionEngine::with_defaults(Some(42))?;
//! let result = engine.run("Patient <PERSOON> was born <DATE>.", true);
//!
//! assert!(!result.text.contains("<PERSOON>"));
//! assert_eq!(result.replacement_count(), 2);
//! # Ok(())
//! # }
//! ```

use crate::config::PlainsightConfig;
use crate::core::registry::{check_cross_category_duplicates, PatternBinding, PatternRegistry};
use crate::domain::{AnonymizedText, MappingRecord, PhiCategory, PlainsightError, Result};
use crate::generators::{GenerationContext, SurrogateGenerators};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;
use std::collections::HashMap;

/// A binding compiled for matching
#[derive(Debug)]
struct CompiledBinding {
    binding: PatternBinding,
    /// Name of this binding's group in the combined alternation
    group_name: String,
    /// The binding's own pattern, for capture sub-group extraction
    regex: Regex,
}

/// Placeholder substitution engine
///
/// Owns its RNG: a seeded engine replays the same surrogates for the same
/// input, and two engines never share random state.
#[derive(Debug)]
pub struct SubstitutionEngine {
    bindings: Vec<CompiledBinding>,
    combined: Option<Regex>,
    rng: StdRng,
}

impl SubstitutionEngine {
    /// Create an engine from an ordered binding list
    ///
    /// Every binding pattern is wrapped in its own named capture group and
    /// joined into one alternation, so the firing binding is recoverable
    /// from any match. Binding order decides which alternative wins when
    /// several could match at the same position; the leftmost match wins
    /// overall.
    ///
    /// # Errors
    ///
    /// - [`PlainsightError::DuplicatePatterns`] when two bindings of
    ///   different categories share a pattern string. Hand-assembled
    ///   binding lists fail here exactly like registry construction.
    /// - [`PlainsightError::InvalidPattern`] when a pattern fails to
    ///   compile.
    pub fn new(bindings: Vec<PatternBinding>, seed: Option<u64>) -> Result<Self> {
        check_cross_category_duplicates(
            bindings.iter().map(|b| (b.pattern.as_str(), b.category)),
        )?;

        let mut compiled = Vec::with_capacity(bindings.len());
        let mut alternation = Vec::with_capacity(bindings.len());

        for (index, binding) in bindings.into_iter().enumerate() {
            let regex = Regex::new(&binding.pattern).map_err(|e| {
                PlainsightError::InvalidPattern {
                    category: binding.category,
                    pattern: binding.pattern.clone(),
                    source: Box::new(e),
                }
            })?;

            let group_name = format!("p{index}");
            alternation.push(format!("(?P<{group_name}>{})", binding.pattern));
            compiled.push(CompiledBinding {
                binding,
                group_name,
                regex,
            });
        }

        let combined = if alternation.is_empty() {
            None
        } else {
            let source = alternation.join("|");
            Some(Regex::new(&source).map_err(|e| {
                PlainsightError::Configuration(format!(
                    "failed to compile combined pattern: {e}"
                ))
            })?)
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::debug!(bindings = compiled.len(), seeded = seed.is_some(), "engine ready");

        Ok(Self {
            bindings: compiled,
            combined,
            rng,
        })
    }

    /// Create an engine with the default registry
    pub fn with_defaults(seed: Option<u64>) -> Result<Self> {
        Self::new(PatternRegistry::with_defaults()?.into_bindings(), seed)
    }

    /// Create an engine from a loaded configuration
    pub fn from_config(config: &PlainsightConfig) -> Result<Self> {
        let overrides = config.pattern_overrides()?;
        let caps = config.caps()?;

        let registry = PatternRegistry::build(
            (!overrides.is_empty()).then_some(&overrides),
            (!caps.is_empty()).then_some(&caps),
            &SurrogateGenerators::with_defaults(),
        )?;

        Self::new(registry.into_bindings(), config.seed)
    }

    /// Replace all eligible placeholders in `text`
    ///
    /// One linear pass, left to right, non-overlapping. A category whose
    /// cap is reached stays capped for the rest of the run: later matches
    /// of that category pass through unchanged and don't move the counter.
    /// Text outside matches is copied through byte-identical. With zero
    /// bindings the input comes back unchanged.
    ///
    /// Mapping records carry the original matched text and offsets into
    /// the *input* text.
    pub fn run(&mut self, text: &str, keep_mapping: bool) -> AnonymizedText {
        let Self {
            bindings,
            combined,
            rng,
        } = self;

        let Some(combined) = combined.as_ref() else {
            return AnonymizedText {
                text: text.to_string(),
                mapping: keep_mapping.then(Vec::new),
            };
        };

        let mut output = String::with_capacity(text.len());
        let mut mapping = keep_mapping.then(Vec::new);
        let mut counters: HashMap<PhiCategory, usize> = HashMap::new();
        let mut last_end = 0usize;

        for caps in combined.captures_iter(text) {
            let Some(matched) = caps.get(0) else { continue };
            let Some(compiled) = bindings
                .iter()
                .find(|b| caps.name(&b.group_name).is_some())
            else {
                continue;
            };

            output.push_str(&text[last_end..matched.start()]);
            last_end = matched.end();

            let category = compiled.binding.category;
            let count = counters.get(&category).copied().unwrap_or(0);

            if compiled
                .binding
                .max_per_document
                .is_some_and(|cap| count >= cap)
            {
                tracing::trace!(
                    category = %category,
                    start = matched.start(),
                    "cap reached, span left unchanged"
                );
                output.push_str(matched.as_str());
                continue;
            }

            // Re-run the binding's own pattern on the span so the
            // generator sees its pattern's capture groups unshifted by the
            // alternation.
            let surrogate = match compiled.regex.captures(matched.as_str()) {
                Some(local) => {
                    (compiled.binding.generator)(&GenerationContext::new(local), rng)
                }
                None => matched.as_str().to_string(),
            };
            counters.insert(category, count + 1);

            tracing::debug!(
                category = %category,
                start = matched.start(),
                end = matched.end(),
                "replaced placeholder"
            );

            if let Some(records) = mapping.as_mut() {
                records.push(MappingRecord {
                    category,
                    pattern: compiled.binding.pattern.clone(),
                    original: matched.as_str().to_string(),
                    surrogate: surrogate.clone(),
                    start: matched.start(),
                    end: matched.end(),
                });
            }

            output.push_str(&surrogate);
        }

        output.push_str(&text[last_end..]);

        AnonymizedText {
            text: output,
            mapping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::SurrogateGenerator;
    use rand::Rng;

    fn fixed_generator(_ctx: &GenerationContext<'_>, _rng: &mut StdRng) -> String {
        "XXX".to_string()
    }

    fn binding(
        category: PhiCategory,
        pattern: &str,
        generator: SurrogateGenerator,
        cap: Option<usize>,
    ) -> PatternBinding {
        PatternBinding {
            category,
            pattern: pattern.to_string(),
            generator,
            max_per_document: cap,
        }
    }

    #[test]
    fn test_zero_bindings_returns_input_unchanged() {
        let mut engine = SubstitutionEngine::new(Vec::new(), Some(1)).unwrap();
        let result = engine.run("text with <TAGS> kept", true);
        assert_eq!(result.text, "text with <TAGS> kept");
        assert_eq!(result.mapping, Some(vec![]));
    }

    #[test]
    fn test_surrounding_text_is_untouched() {
        let bindings = vec![binding(PhiCategory::Date, "<D>", fixed_generator, None)];
        let mut engine = SubstitutionEngine::new(bindings, Some(1)).unwrap();
        let result = engine.run("a <D> b <D> c", true);
        assert_eq!(result.text, "a XXX b XXX c");
    }

    #[test]
    fn test_mapping_offsets_point_into_original_text() {
        let bindings = vec![binding(PhiCategory::Date, "<DAT>", fixed_generator, None)];
        let mut engine = SubstitutionEngine::new(bindings, Some(1)).unwrap();

        let input = "x <DAT> yy <DAT>";
        let result = engine.run(input, true);
        let records = result.mapping.unwrap();

        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(&input[record.start..record.end], record.original);
            assert_eq!(record.original, "<DAT>");
        }
        assert!(records[0].start < records[1].start);
    }

    #[test]
    fn test_cap_leaves_later_matches_unchanged_permanently() {
        let bindings = vec![binding(PhiCategory::PatientId, "<P>", fixed_generator, Some(2))];
        let mut engine = SubstitutionEngine::new(bindings, Some(1)).unwrap();

        let result = engine.run("<P> <P> <P> <P>", true);
        assert_eq!(result.text, "XXX XXX <P> <P>");
        assert_eq!(result.replacement_count(), 2);
    }

    #[test]
    fn test_keep_mapping_false_omits_mapping() {
        let bindings = vec![binding(PhiCategory::Date, "<D>", fixed_generator, None)];
        let mut engine = SubstitutionEngine::new(bindings, Some(1)).unwrap();
        let result = engine.run("<D>", false);
        assert_eq!(result.text, "XXX");
        assert!(result.mapping.is_none());
    }

    #[test]
    fn test_hand_assembled_duplicates_fail_like_registry() {
        let bindings = vec![
            binding(PhiCategory::Date, "<SAME>", fixed_generator, None),
            binding(PhiCategory::Time, "<SAME>", fixed_generator, None),
        ];
        let err = SubstitutionEngine::new(bindings, None).unwrap_err();
        assert!(matches!(err, PlainsightError::DuplicatePatterns(_)));
    }

    #[test]
    fn test_same_category_repeat_is_allowed() {
        let bindings = vec![
            binding(PhiCategory::Date, "<D>", fixed_generator, None),
            binding(PhiCategory::Date, "<D>", fixed_generator, None),
        ];
        assert!(SubstitutionEngine::new(bindings, None).is_ok());
    }

    #[test]
    fn test_invalid_pattern_is_reported_with_category() {
        let bindings = vec![binding(PhiCategory::Date, "<(unclosed", fixed_generator, None)];
        let err = SubstitutionEngine::new(bindings, None).unwrap_err();
        match err {
            PlainsightError::InvalidPattern { category, .. } => {
                assert_eq!(category, PhiCategory::Date);
            }
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_earlier_binding_wins_at_equal_start() {
        fn first_marker(_ctx: &GenerationContext<'_>, _rng: &mut StdRng) -> String {
            "FIRST".to_string()
        }
        fn second_marker(_ctx: &GenerationContext<'_>, _rng: &mut StdRng) -> String {
            "SECOND".to_string()
        }

        // both alternatives match at position 0; declaration order breaks
        // the tie, so the shorter but earlier pattern wins
        let bindings = vec![
            binding(PhiCategory::Date, "<ID>", first_marker, None),
            binding(PhiCategory::Time, "<ID>X", second_marker, None),
        ];
        let mut engine = SubstitutionEngine::new(bindings, Some(1)).unwrap();
        let result = engine.run("<ID>X", true);
        assert_eq!(result.text, "FIRSTX");
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let text = "Patient <PERSOON>, born <DATE>, seen at <TIME> in <ZIEKENHUIS>.";

        let mut first = SubstitutionEngine::with_defaults(Some(42)).unwrap();
        let mut second = SubstitutionEngine::with_defaults(Some(42)).unwrap();

        let a = first.run(text, true);
        let b = second.run(text, true);

        assert_eq!(a.text, b.text);
        assert_eq!(a.mapping, b.mapping);
    }

    #[test]
    fn test_generator_draws_come_from_engine_rng() {
        fn draw_marker(_ctx: &GenerationContext<'_>, rng: &mut StdRng) -> String {
            rng.gen_range(0..1_000_000u32).to_string()
        }

        let make = |seed| {
            SubstitutionEngine::new(
                vec![binding(PhiCategory::PhiNumber, "<N>", draw_marker, None)],
                Some(seed),
            )
            .unwrap()
        };

        let same_a = make(7).run("<N> <N>", false).text;
        let same_b = make(7).run("<N> <N>", false).text;
        let other = make(8).run("<N> <N>", false).text;

        assert_eq!(same_a, same_b);
        assert_ne!(same_a, other);
    }
}
