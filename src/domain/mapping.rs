//! Replacement mapping models

use crate::domain::category::PhiCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One performed replacement
///
/// Offsets are byte positions in the *original* input text, not the output:
/// surrogates change the length of the text, so output offsets would drift.
/// Records are emitted in order of appearance in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// Category of the replaced placeholder
    pub category: PhiCategory,
    /// Pattern string of the binding that fired
    pub pattern: String,
    /// Text of the matched span in the input
    pub original: String,
    /// Generated surrogate that replaced the span
    pub surrogate: String,
    /// Start byte offset of the match in the input
    pub start: usize,
    /// End byte offset of the match in the input
    pub end: usize,
}

/// Result of one substitution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedText {
    /// Text with all eligible placeholders replaced
    pub text: String,
    /// Ordered replacement records, `None` when mapping was not requested
    pub mapping: Option<Vec<MappingRecord>>,
}

impl AnonymizedText {
    /// Number of mapping records, zero when mapping was not kept
    pub fn replacement_count(&self) -> usize {
        self.mapping.as_ref().map_or(0, |m| m.len())
    }

    /// Count mapping records per category
    pub fn stats_by_category(&self) -> HashMap<PhiCategory, usize> {
        let mut stats = HashMap::new();
        if let Some(records) = &self.mapping {
            for record in records {
                *stats.entry(record.category).or_insert(0) += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: PhiCategory, start: usize) -> MappingRecord {
        MappingRecord {
            category,
            pattern: "<X>".to_string(),
            original: "<X>".to_string(),
            surrogate: "y".to_string(),
            start,
            end: start + 3,
        }
    }

    #[test]
    fn test_stats_by_category() {
        let result = AnonymizedText {
            text: "y y y".to_string(),
            mapping: Some(vec![
                record(PhiCategory::Date, 0),
                record(PhiCategory::Date, 4),
                record(PhiCategory::Time, 8),
            ]),
        };

        let stats = result.stats_by_category();
        assert_eq!(stats.get(&PhiCategory::Date), Some(&2));
        assert_eq!(stats.get(&PhiCategory::Time), Some(&1));
        assert_eq!(result.replacement_count(), 3);
    }

    #[test]
    fn test_no_mapping_counts_zero() {
        let result = AnonymizedText {
            text: String::new(),
            mapping: None,
        };
        assert_eq!(result.replacement_count(), 0);
        assert!(result.stats_by_category().is_empty());
    }

    #[test]
    fn test_mapping_record_serializes_category_label() {
        let json = serde_json::to_string(&record(PhiCategory::PersonName, 0)).unwrap();
        assert!(json.contains("\"person_name\""));
    }
}
