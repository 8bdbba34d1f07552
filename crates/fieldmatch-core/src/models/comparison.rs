//! Comparison report models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::FieldType;

/// Qualitative magnitude of a field mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field whose values agree in both documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: FieldType,
    pub label: String,
    pub value: String,
    pub confidence: f32,
}

/// A field whose values disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    pub field: FieldType,
    pub label: String,
    pub value1: String,
    pub value2: String,
    pub severity: Severity,
}

/// A field present in only one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    pub field: FieldType,
    pub label: String,
    pub value: String,
    /// Identifier of the document that has the field.
    pub file: String,
}

/// Comparison counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_comparisons: usize,
    pub exact_matches: usize,
    pub differences: usize,
    /// Rounded share of exact matches (0 - 100).
    pub match_percentage: u8,
}

/// Discrepancy report for two field sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub file1: String,
    pub file2: String,
    pub total_fields_1: usize,
    pub total_fields_2: usize,
    pub matches: Vec<FieldMatch>,
    pub differences: Vec<Difference>,
    /// Fields present only in the second document.
    pub missing_in_file1: Vec<MissingEntry>,
    /// Fields present only in the first document.
    pub missing_in_file2: Vec<MissingEntry>,
    pub summary: ComparisonSummary,
}

impl ComparisonResult {
    /// All compared fields agree and none is missing on either side.
    pub fn is_perfect_match(&self) -> bool {
        self.summary.total_comparisons > 0
            && self.summary.exact_matches == self.summary.total_comparisons
    }

    /// Highest severity among the differences, if any.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.differences.iter().map(|d| d.severity).max()
    }
}
