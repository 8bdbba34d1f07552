//! Field extraction from page feeds.

mod extractor;
pub mod patterns;
pub mod reading_order;
pub mod registry;

pub use extractor::{ExtractedDocument, ExtractionMetadata, FieldExtractor, FormFieldEntry};
pub use registry::{categorize, pattern_for, registry, FieldPattern};
