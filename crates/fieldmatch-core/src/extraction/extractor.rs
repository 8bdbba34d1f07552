//! Two-path field extractor: form widgets and label/value pairs in page text.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::reading_order::reading_order;
use super::registry::{categorize, registry, FieldPattern};
use crate::document::PageSource;
use crate::error::{ExtractionError, Result};
use crate::models::config::ExtractionConfig;
use crate::models::field::{FieldRecord, FieldSet, FieldSource, Point};
use crate::models::page::{PageContent, TextToken};
use crate::normalize::normalize;

/// Everything extracted from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Document identifier.
    pub name: String,
    /// Number of pages processed.
    pub total_pages: u32,
    /// Categorized fields, values normalized.
    pub fields: FieldSet,
    /// Every named form widget seen, categorized or not.
    pub form_fields: Vec<FormFieldEntry>,
    /// Extraction diagnostics.
    pub metadata: ExtractionMetadata,
}

/// A form widget as found in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFieldEntry {
    /// `form_<page>_<index>`.
    pub id: String,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f32; 4]>,
}

/// Extraction diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    pub total_fields: usize,
    pub form_field_count: usize,
    pub text_field_count: usize,
    pub widget_count: usize,
    pub processing_time_ms: u64,
}

/// Extracts a [`FieldSet`] from a document's pages.
pub struct FieldExtractor {
    config: ExtractionConfig,
}

/// Mutable state for one extraction call.
#[derive(Default)]
struct Extraction {
    fields: FieldSet,
    form_fields: Vec<FormFieldEntry>,
}

impl FieldExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract fields from a page source.
    ///
    /// Pages are awaited one at a time in ascending order. A page that fails
    /// to load aborts the whole document.
    pub async fn extract<S: PageSource>(&self, source: &mut S) -> Result<ExtractedDocument> {
        let start = Instant::now();
        let name = source.name().to_string();
        let page_count = source.page_count();

        info!("Extracting fields from {} ({} pages)", name, page_count);

        let mut extraction = Extraction::default();
        for number in 1..=page_count {
            let page = source
                .load_page(number)
                .await
                .map_err(|err| ExtractionError::DocumentRead {
                    document: name.clone(),
                    page: number,
                    source: err,
                })?;
            self.process_page(number, &page, &mut extraction);
        }

        Ok(self.finish(name, page_count, extraction, start))
    }

    /// Extract fields from pages that are already in memory.
    pub fn extract_pages(&self, name: &str, pages: &[PageContent]) -> ExtractedDocument {
        let start = Instant::now();

        info!("Extracting fields from {} ({} pages)", name, pages.len());

        let mut ordered: Vec<&PageContent> = pages.iter().collect();
        ordered.sort_by_key(|p| p.number);

        let mut extraction = Extraction::default();
        for page in ordered {
            self.process_page(page.number, page, &mut extraction);
        }

        self.finish(name.to_string(), pages.len() as u32, extraction, start)
    }

    fn process_page(&self, number: u32, page: &PageContent, extraction: &mut Extraction) {
        let before = extraction.fields.len();

        self.process_form_fields(number, page, extraction);
        self.process_text(number, &page.tokens, &mut extraction.fields);

        debug!(
            "Page {}: {} annotations, {} tokens, {} new fields",
            number,
            page.annotations.len(),
            page.tokens.len(),
            extraction.fields.len() - before
        );
    }

    fn process_form_fields(&self, number: u32, page: &PageContent, extraction: &mut Extraction) {
        for (index, annotation) in page.annotations.iter().enumerate() {
            if !annotation.is_form_field() {
                trace!("Skipping annotation {} on page {}", index, number);
                continue;
            }

            extraction.form_fields.push(FormFieldEntry {
                id: format!("form_{}_{}", number, index),
                name: annotation.name.clone(),
                value: annotation.value.clone(),
                type_tag: annotation.type_tag.clone().unwrap_or_else(|| "text".to_string()),
                page: number,
                rect: annotation.rect,
            });

            let Some(pattern) = categorize(&annotation.name, &annotation.value) else {
                trace!("Form field {:?} not categorized", annotation.name);
                continue;
            };

            let record = FieldRecord::new(
                annotation.name.as_str(),
                annotation.value.as_str(),
                pattern.semantic_type,
                self.config.form_field_confidence,
                FieldSource::FormField,
                number,
            );

            if extraction.fields.insert(pattern.field_type, record) {
                debug!("Form field {:?} -> {}", annotation.name, pattern.field_type);
            }
        }
    }

    fn process_text(&self, number: u32, tokens: &[TextToken], fields: &mut FieldSet) {
        let ordered = reading_order(tokens, self.config.same_line_tolerance);

        for (index, token) in ordered.iter().enumerate() {
            let label = token.text.trim();
            if label.is_empty() {
                continue;
            }

            for pattern in registry() {
                if !pattern.matches_label(label) || fields.contains(pattern.field_type) {
                    continue;
                }
                trace!("Label {:?} for {} on page {}", label, pattern.field_type, number);

                if let Some((value, position)) = self.find_nearby_value(&ordered, index, pattern) {
                    let record = FieldRecord::new(
                        label,
                        value,
                        pattern.semantic_type,
                        self.config.text_pattern_confidence,
                        FieldSource::TextPattern,
                        number,
                    )
                    .with_position(token.origin(), position);

                    fields.insert(pattern.field_type, record);
                    debug!("Text field {:?} = {:?} -> {}", label, value, pattern.field_type);
                }
            }
        }
    }

    /// Find the first token after `label_index`, within the search window and
    /// radius, whose text is a plausible value for `pattern`.
    fn find_nearby_value<'t>(
        &self,
        ordered: &[&'t TextToken],
        label_index: usize,
        pattern: &FieldPattern,
    ) -> Option<(&'t str, Point)> {
        let label_pos = ordered[label_index].origin();

        ordered
            .iter()
            .skip(label_index + 1)
            .take(self.config.search_window)
            .filter(|t| label_pos.distance(&t.origin()) <= self.config.search_radius)
            .find_map(|&t| pattern.capture_value(&t.text).map(|v| (v, t.origin())))
    }

    fn finish(
        &self,
        name: String,
        total_pages: u32,
        extraction: Extraction,
        start: Instant,
    ) -> ExtractedDocument {
        let Extraction {
            mut fields,
            form_fields,
        } = extraction;

        for record in fields.values_mut() {
            record.value = normalize(&record.value, record.semantic_type);
        }

        let metadata = ExtractionMetadata {
            total_fields: fields.len(),
            form_field_count: fields.count_by_source(FieldSource::FormField),
            text_field_count: fields.count_by_source(FieldSource::TextPattern),
            widget_count: form_fields.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Extracted {} fields from {} ({} form, {} text)",
            metadata.total_fields, name, metadata.form_field_count, metadata.text_field_count
        );

        ExtractedDocument {
            name,
            total_pages,
            fields,
            form_fields,
            metadata,
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
