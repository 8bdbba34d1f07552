//! Ordered registry of field definitions.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::*;
use crate::models::field::{FieldType, SemanticType};

/// Definition of one field category.
#[derive(Debug)]
pub struct FieldPattern {
    pub field_type: FieldType,
    pub semantic_type: SemanticType,
    label: &'static Regex,
    value: &'static Regex,
}

impl FieldPattern {
    /// Whether `text` looks like a caption for this field.
    pub fn matches_label(&self, text: &str) -> bool {
        self.label.is_match(text)
    }

    /// Whether `text` is a plausible value for this field.
    pub fn matches_value(&self, text: &str) -> bool {
        self.value.is_match(text)
    }

    /// Extract the value from `text`, without surrounding whitespace.
    pub fn capture_value<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.value
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
    }
}

lazy_static! {
    static ref FIELD_PATTERNS: Vec<FieldPattern> = vec![
        FieldPattern {
            field_type: FieldType::Name,
            semantic_type: SemanticType::PersonName,
            label: &NAME_LABEL,
            value: &NAME_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Document,
            semantic_type: SemanticType::IdNumber,
            label: &DOCUMENT_LABEL,
            value: &DOCUMENT_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Email,
            semantic_type: SemanticType::Email,
            label: &EMAIL_LABEL,
            value: &EMAIL_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Phone,
            semantic_type: SemanticType::Phone,
            label: &PHONE_LABEL,
            value: &PHONE_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Date,
            semantic_type: SemanticType::Date,
            label: &DATE_LABEL,
            value: &DATE_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Address,
            semantic_type: SemanticType::Address,
            label: &ADDRESS_LABEL,
            value: &ADDRESS_VALUE,
        },
        FieldPattern {
            field_type: FieldType::PostalCode,
            semantic_type: SemanticType::PostalCode,
            label: &POSTAL_CODE_LABEL,
            value: &POSTAL_CODE_VALUE,
        },
        FieldPattern {
            field_type: FieldType::City,
            semantic_type: SemanticType::City,
            label: &CITY_LABEL,
            value: &NAME_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Country,
            semantic_type: SemanticType::Country,
            label: &COUNTRY_LABEL,
            value: &NAME_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Profession,
            semantic_type: SemanticType::Profession,
            label: &PROFESSION_LABEL,
            value: &NAME_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Company,
            semantic_type: SemanticType::Company,
            label: &COMPANY_LABEL,
            value: &COMPANY_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Salary,
            semantic_type: SemanticType::Money,
            label: &SALARY_LABEL,
            value: &SALARY_VALUE,
        },
        FieldPattern {
            field_type: FieldType::Gender,
            semantic_type: SemanticType::Gender,
            label: &GENDER_LABEL,
            value: &GENDER_VALUE,
        },
        FieldPattern {
            field_type: FieldType::MaritalStatus,
            semantic_type: SemanticType::MaritalStatus,
            label: &MARITAL_STATUS_LABEL,
            value: &MARITAL_STATUS_VALUE,
        },
    ];
}

/// All field patterns, in registry order.
pub fn registry() -> &'static [FieldPattern] {
    &FIELD_PATTERNS
}

/// Pattern for a field type.
pub fn pattern_for(field_type: FieldType) -> &'static FieldPattern {
    // FieldType variants are declared in registry order.
    &FIELD_PATTERNS[field_type as usize]
}

/// Categorize a form widget by its name and value.
///
/// The first pattern whose label matches the name, or whose value pattern
/// matches the value, wins.
pub fn categorize(name: &str, value: &str) -> Option<&'static FieldPattern> {
    registry()
        .iter()
        .find(|p| p.matches_label(name) || p.matches_value(value))
}
