//! Comparison of two extracted field sets.

pub mod equality;

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::extraction::{pattern_for, ExtractedDocument};
use crate::models::comparison::*;
use crate::models::config::ComparisonConfig;
use crate::models::field::{FieldRecord, FieldSet, FieldType};
use crate::normalize::normalize;
use crate::similarity::similarity;

pub use equality::{values_equal, values_equal_with};

/// Compares field sets and scores their differences.
pub struct FieldComparator {
    config: ComparisonConfig,
}

impl FieldComparator {
    /// Create a comparator with default severity thresholds.
    pub fn new() -> Self {
        Self::with_config(ComparisonConfig::default())
    }

    pub fn with_config(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Compare two extracted documents, identified by their names.
    pub fn compare_documents(&self, a: &ExtractedDocument, b: &ExtractedDocument) -> ComparisonResult {
        self.compare(&a.fields, &b.fields, &a.name, &b.name)
    }

    /// Compare two field sets.
    ///
    /// Every field type present in either set is compared exactly once, in
    /// registry order.
    pub fn compare(&self, a: &FieldSet, b: &FieldSet, id_a: &str, id_b: &str) -> ComparisonResult {
        info!("Comparing {} ({} fields) with {} ({} fields)", id_a, a.len(), id_b, b.len());

        let union: BTreeSet<FieldType> = a.field_types().chain(b.field_types()).collect();

        let mut result = ComparisonResult {
            file1: id_a.to_string(),
            file2: id_b.to_string(),
            total_fields_1: a.len(),
            total_fields_2: b.len(),
            matches: Vec::new(),
            differences: Vec::new(),
            missing_in_file1: Vec::new(),
            missing_in_file2: Vec::new(),
            summary: ComparisonSummary {
                total_comparisons: union.len(),
                ..ComparisonSummary::default()
            },
        };

        for field in union {
            match (a.get(field), b.get(field)) {
                (Some(fa), Some(fb)) => self.compare_field(field, fa, fb, &mut result),
                (Some(fa), None) => {
                    debug!("{} only in {}", field, id_a);
                    result.missing_in_file2.push(missing_entry(field, fa, id_a));
                }
                (None, Some(fb)) => {
                    debug!("{} only in {}", field, id_b);
                    result.missing_in_file1.push(missing_entry(field, fb, id_b));
                }
                (None, None) => unreachable!("field type taken from one of the sets"),
            }
        }

        result.summary.exact_matches = result.matches.len();
        result.summary.differences = result.differences.len();
        result.summary.match_percentage = match_percentage(
            result.summary.exact_matches,
            result.summary.total_comparisons,
        );

        info!(
            "Comparison {} vs {}: {}% match, {} differences",
            id_a, id_b, result.summary.match_percentage, result.summary.differences
        );

        result
    }

    fn compare_field(&self, field: FieldType, fa: &FieldRecord, fb: &FieldRecord, result: &mut ComparisonResult) {
        let semantic_type = pattern_for(field).semantic_type;
        let value1 = normalize(&fa.value, semantic_type);
        let value2 = normalize(&fb.value, semantic_type);
        let label = if fa.label.is_empty() { fb.label.clone() } else { fa.label.clone() };

        if values_equal_with(&value1, &value2, semantic_type, self.config.date_order) {
            debug!("{} matches: {:?}", field, value1);
            result.matches.push(FieldMatch {
                field,
                label,
                value: value1,
                confidence: fa.confidence.min(fb.confidence),
            });
        } else {
            let severity = self.severity(&value1, &value2);
            debug!("{} differs ({}): {:?} vs {:?}", field, severity, value1, value2);
            result.differences.push(Difference {
                field,
                label,
                value1,
                value2,
                severity,
            });
        }
    }

    /// Severity of a mismatch between two values.
    ///
    /// An empty value is always high severity; otherwise the severity follows
    /// the similarity of the two strings.
    pub fn severity(&self, value1: &str, value2: &str) -> Severity {
        if value1.trim().is_empty() || value2.trim().is_empty() {
            return Severity::High;
        }

        let score = similarity(value1, value2);
        if score > self.config.low_severity_threshold {
            Severity::Low
        } else if score > self.config.medium_severity_threshold {
            Severity::Medium
        } else {
            Severity::High
        }
    }
}

impl Default for FieldComparator {
    fn default() -> Self {
        Self::new()
    }
}

fn missing_entry(field: FieldType, record: &FieldRecord, file: &str) -> MissingEntry {
    MissingEntry {
        field,
        label: record.label.clone(),
        value: normalize(&record.value, pattern_for(field).semantic_type),
        file: file.to_string(),
    }
}

fn match_percentage(exact_matches: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (exact_matches as f64 * 100.0 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DateOrder;
    use crate::models::field::{FieldSource, SemanticType};
    use pretty_assertions::assert_eq;

    fn field(field: FieldType, value: &str) -> (FieldType, FieldRecord) {
        let semantic_type = pattern_for(field).semantic_type;
        let record = FieldRecord::new(field.as_str(), value, semantic_type, 0.9, FieldSource::FormField, 1);
        (field, record)
    }

    fn set(fields: &[(FieldType, &str)]) -> FieldSet {
        fields.iter().map(|(t, v)| field(*t, v)).collect()
    }

    fn assert_invariants(result: &ComparisonResult) {
        let summary = result.summary;
        assert_eq!(
            summary.total_comparisons,
            summary.exact_matches
                + result.differences.len()
                + result.missing_in_file1.len()
                + result.missing_in_file2.len()
        );
        assert_eq!(summary.differences, result.differences.len());
        assert!(summary.match_percentage <= 100);

        let mut seen = BTreeSet::new();
        let fields = result
            .matches
            .iter()
            .map(|m| m.field)
            .chain(result.differences.iter().map(|d| d.field))
            .chain(result.missing_in_file1.iter().map(|m| m.field))
            .chain(result.missing_in_file2.iter().map(|m| m.field));
        for f in fields {
            assert!(seen.insert(f), "{} reported twice", f);
        }
    }

    #[test]
    fn test_identical_emails() {
        let a = set(&[(FieldType::Email, "John@Example.com")]);
        let b = set(&[(FieldType::Email, "john@example.com")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].value, "john@example.com");
        assert_eq!(result.summary.match_percentage, 100);
        assert!(result.is_perfect_match());
        assert_invariants(&result);
    }

    #[test]
    fn test_phone_prefix_is_a_match() {
        let a = set(&[(FieldType::Phone, "+1 555-1234")]);
        let b = set(&[(FieldType::Phone, "5551234")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(result.summary.exact_matches, 1);
        assert!(result.differences.is_empty());
    }

    #[test]
    fn test_reordered_name() {
        let a = set(&[(FieldType::Name, "Ana Maria Lopez")]);
        let b = set(&[(FieldType::Name, "Lopez Ana Maria")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(result.summary.exact_matches, 1);
        assert_eq!(result.matches[0].value, "Ana Maria Lopez");
    }

    #[test]
    fn test_asymmetric_presence() {
        let a = set(&[(FieldType::Name, "Ana Lopez"), (FieldType::Email, "ana@example.com")]);
        let b = set(&[(FieldType::Name, "Ana Lopez"), (FieldType::Phone, "555 1234")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(result.summary.total_comparisons, 3);
        assert_eq!(result.summary.exact_matches, 1);
        assert_eq!(result.summary.match_percentage, 33);

        assert_eq!(result.missing_in_file2.len(), 1);
        assert_eq!(result.missing_in_file2[0].field, FieldType::Email);
        assert_eq!(result.missing_in_file2[0].file, "a.pdf");

        assert_eq!(result.missing_in_file1.len(), 1);
        assert_eq!(result.missing_in_file1[0].field, FieldType::Phone);
        assert_eq!(result.missing_in_file1[0].value, "5551234");
        assert_eq!(result.missing_in_file1[0].file, "b.pdf");

        assert!(!result.is_perfect_match());
        assert_invariants(&result);
    }

    #[test]
    fn test_difference_report() {
        let a = set(&[(FieldType::Address, "Calle Mayor 5"), (FieldType::Gender, "F")]);
        let b = set(&[(FieldType::Address, "Calle Mayor 6"), (FieldType::Gender, "F")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(
            result.differences,
            vec![Difference {
                field: FieldType::Address,
                label: "direccion".to_string(),
                value1: "Calle Mayor 5".to_string(),
                value2: "Calle Mayor 6".to_string(),
                severity: Severity::Low,
            }]
        );
        assert_eq!(result.summary.match_percentage, 50);
        assert_eq!(result.worst_severity(), Some(Severity::Low));
        assert_invariants(&result);
    }

    #[test]
    fn test_severity_bands() {
        let comparator = FieldComparator::new();

        assert_eq!(comparator.severity("Madrid Centro", "Madrid Centra"), Severity::Low);
        assert_eq!(comparator.severity("abcdef", "abcdxy"), Severity::Medium);
        assert_eq!(comparator.severity("abcdef", "abcxyz"), Severity::High);
        assert_eq!(comparator.severity("abc", "xyz"), Severity::High);
    }

    #[test]
    fn test_empty_value_is_high_severity() {
        let comparator = FieldComparator::new();
        assert_eq!(comparator.severity("", "a"), Severity::High);
        assert_eq!(comparator.severity("a", ""), Severity::High);
        assert_eq!(comparator.severity("", ""), Severity::High);

        let a = set(&[(FieldType::Email, "")]);
        let b = set(&[(FieldType::Email, "")]);
        let result = comparator.compare(&a, &b, "a.pdf", "b.pdf");

        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].severity, Severity::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let comparator = FieldComparator::with_config(ComparisonConfig {
            low_severity_threshold: 0.95,
            medium_severity_threshold: 0.9,
            ..ComparisonConfig::default()
        });

        assert_eq!(comparator.severity("Madrid Centro", "Madrid Centra"), Severity::Medium);
    }

    #[test]
    fn test_date_order_from_config() {
        let a = set(&[(FieldType::Date, "02/01/2024")]);
        let b = set(&[(FieldType::Date, "2024-01-02")]);

        let month_first = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");
        assert_eq!(month_first.summary.exact_matches, 0);
        assert_eq!(month_first.differences.len(), 1);

        let day_first = FieldComparator::with_config(ComparisonConfig {
            date_order: DateOrder::DayFirst,
            ..ComparisonConfig::default()
        })
        .compare(&a, &b, "a.pdf", "b.pdf");
        assert_eq!(day_first.summary.match_percentage, 100);
    }

    #[test]
    fn test_name_containment_is_one_sided() {
        let a = set(&[(FieldType::Name, "Ana Ana Lopez")]);
        let b = set(&[(FieldType::Name, "Ana Lopez Maria")]);

        let comparator = FieldComparator::new();
        let ab = comparator.compare(&a, &b, "a.pdf", "b.pdf");
        let ba = comparator.compare(&b, &a, "b.pdf", "a.pdf");

        // Every word of the first name occurs in the second, not the reverse.
        assert_eq!(ab.summary.match_percentage, 100);
        assert_eq!(ba.summary.match_percentage, 0);
        assert_eq!(ba.differences.len(), 1);
    }

    #[test]
    fn test_symmetry() {
        let a = set(&[
            (FieldType::Name, "Ana Lopez"),
            (FieldType::Email, "ana@example.com"),
            (FieldType::Address, "Calle Mayor 5"),
            (FieldType::City, "Madrid"),
        ]);
        let b = set(&[
            (FieldType::Name, "Ana López"),
            (FieldType::Phone, "555 1234"),
            (FieldType::Address, "Avenida Sol 12"),
            (FieldType::City, "madrid"),
        ]);

        let comparator = FieldComparator::new();
        let ab = comparator.compare(&a, &b, "a.pdf", "b.pdf");
        let ba = comparator.compare(&b, &a, "b.pdf", "a.pdf");

        assert_eq!(ab.summary.match_percentage, ba.summary.match_percentage);
        assert_eq!(ab.missing_in_file1, ba.missing_in_file2);
        assert_eq!(ab.missing_in_file2, ba.missing_in_file1);
        assert_eq!(ab.differences.len(), ba.differences.len());
        for (x, y) in ab.differences.iter().zip(&ba.differences) {
            assert_eq!(x.field, y.field);
            assert_eq!(x.value1, y.value2);
            assert_eq!(x.value2, y.value1);
            assert_eq!(x.severity, y.severity);
        }
        assert_invariants(&ab);
        assert_invariants(&ba);
    }

    #[test]
    fn test_label_falls_back_to_second() {
        let (t, mut ra) = field(FieldType::Email, "a@b.co");
        ra.label = String::new();
        let a: FieldSet = vec![(t, ra)].into_iter().collect();
        let b = set(&[(FieldType::Email, "a@b.co")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");
        assert_eq!(result.matches[0].label, "email");
    }

    #[test]
    fn test_match_confidence_is_minimum() {
        let a = set(&[(FieldType::Email, "a@b.co")]);
        let b: FieldSet = vec![(
            FieldType::Email,
            FieldRecord::new("Email:", "a@b.co", SemanticType::Email, 0.8, FieldSource::TextPattern, 2),
        )]
        .into_iter()
        .collect();

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");
        assert_eq!(result.matches[0].confidence, 0.8);
    }

    #[test]
    fn test_empty_sets() {
        let result = FieldComparator::new().compare(&FieldSet::new(), &FieldSet::new(), "a.pdf", "b.pdf");

        assert_eq!(result.summary, ComparisonSummary::default());
        assert!(!result.is_perfect_match());
        assert_invariants(&result);
    }

    #[test]
    fn test_results_follow_registry_order() {
        let a = set(&[(FieldType::MaritalStatus, "casado"), (FieldType::Name, "Ana"), (FieldType::Date, "01/01/2000")]);
        let b = set(&[(FieldType::Date, "2000-01-01"), (FieldType::MaritalStatus, "casado"), (FieldType::Name, "Ana")]);

        let result = FieldComparator::new().compare(&a, &b, "a.pdf", "b.pdf");

        let order: Vec<FieldType> = result.matches.iter().map(|m| m.field).collect();
        assert_eq!(order, vec![FieldType::Name, FieldType::Date, FieldType::MaritalStatus]);
    }
}
