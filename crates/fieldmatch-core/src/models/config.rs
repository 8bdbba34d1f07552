//! Configuration structures for extraction and comparison.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration for the fieldmatch pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMatchConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Field comparison configuration.
    pub comparison: ComparisonConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Confidence assigned to fields read from form widgets.
    pub form_field_confidence: f32,

    /// Confidence assigned to label/value pairs found in page text.
    pub text_pattern_confidence: f32,

    /// Maximum vertical offset for two tokens to share a line.
    pub same_line_tolerance: f32,

    /// Maximum distance between a label and its value.
    pub search_radius: f32,

    /// Number of tokens after a label searched for its value.
    pub search_window: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            form_field_confidence: 0.9,
            text_pattern_confidence: 0.8,
            same_line_tolerance: 10.0,
            search_radius: 100.0,
            search_window: 10,
        }
    }
}

/// Field comparison configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Similarity above which a mismatch is low severity.
    pub low_severity_threshold: f64,

    /// Similarity above which a mismatch is medium severity.
    pub medium_severity_threshold: f64,

    /// Field order of dates that do not start with a four-digit year.
    pub date_order: DateOrder,
}

/// Order of day and month in `a/b/year` dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `m/d/y`
    #[default]
    MonthFirst,
    /// `d/m/y`
    DayFirst,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            low_severity_threshold: 0.8,
            medium_severity_threshold: 0.5,
            date_order: DateOrder::default(),
        }
    }
}

impl FieldMatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}
