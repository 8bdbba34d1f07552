//! Per-type value normalization.
//!
//! Normalization is pure and idempotent: normalizing an already normalized
//! value returns it unchanged.

use crate::models::field::SemanticType;

/// Canonicalize a raw value according to its semantic type.
pub fn normalize(value: &str, semantic_type: SemanticType) -> String {
    let value = value.trim();

    match semantic_type {
        SemanticType::Email => value.to_lowercase(),
        SemanticType::Phone => value
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
            .collect(),
        SemanticType::IdNumber => value
            .chars()
            .filter(|c| !matches!(c, '.' | '-'))
            .collect::<String>()
            .trim()
            .to_string(),
        SemanticType::PersonName | SemanticType::City | SemanticType::Country => {
            title_case(value)
        }
        _ => value.to_string(),
    }
}

/// Lowercase, then capitalize the first letter of every whitespace-separated word.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;

    for c in value.to_lowercase().chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            word_start = false;
            out.push(single_uppercase(c));
        } else {
            out.push(c);
        }
    }

    out
}

/// Uppercase form of `c`, or `c` itself when uppercasing would expand it
/// into several characters (e.g. 'ß').
fn single_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
