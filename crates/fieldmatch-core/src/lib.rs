//! Core library for personal-data field extraction and comparison.
//!
//! This crate provides:
//! - A fixed, ordered registry of personal-data field patterns
//! - Field extraction from positioned page text and form widgets
//! - Per-type value normalization
//! - Type-aware comparison of two extracted field sets with severity scoring

pub mod error;
pub mod models;
pub mod document;
pub mod extraction;
pub mod normalize;
pub mod similarity;
pub mod compare;

pub use error::{ConfigError, ExtractionError, FieldMatchError, Result};
pub use models::comparison::{ComparisonResult, ComparisonSummary, Difference, FieldMatch, MissingEntry, Severity};
pub use models::config::{ComparisonConfig, DateOrder, ExtractionConfig, FieldMatchConfig};
pub use models::field::{FieldRecord, FieldSet, FieldSource, FieldType, Point, FieldPosition, SemanticType};
pub use models::page::{FormAnnotation, PageContent, TextToken};
pub use document::{BoxError, DocumentDump, PageSource};
pub use extraction::{ExtractedDocument, ExtractionMetadata, FieldExtractor, FormFieldEntry};
pub use normalize::normalize;
pub use similarity::{levenshtein, similarity};
pub use compare::FieldComparator;
