//! Type-aware equality of normalized field values.

use chrono::NaiveDate;

use crate::models::config::DateOrder;
use crate::models::field::SemanticType;

/// Whether two normalized values denote the same thing, reading dates
/// month-first.
///
/// Empty values never compare equal. Dates, phones and person names have
/// dedicated rules; every other type uses exact string equality.
pub fn values_equal(a: &str, b: &str, semantic_type: SemanticType) -> bool {
    values_equal_with(a, b, semantic_type, DateOrder::default())
}

/// [`values_equal`] with an explicit date field order.
pub fn values_equal_with(a: &str, b: &str, semantic_type: SemanticType, date_order: DateOrder) -> bool {
    if a.trim().is_empty() || b.trim().is_empty() {
        return false;
    }

    match semantic_type {
        SemanticType::Date => dates_equal(a, b, date_order),
        SemanticType::Phone => phones_equal(a, b),
        SemanticType::PersonName => a == b || names_equal(a, b),
        _ => a == b,
    }
}

/// Equal iff both parse to the same calendar day.
pub fn dates_equal(a: &str, b: &str, order: DateOrder) -> bool {
    match (parse_date(a, order), parse_date(b, order)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}

/// Equal iff the digit strings match or one is a suffix of the other, so a
/// missing country code still matches.
pub fn phones_equal(a: &str, b: &str) -> bool {
    let (a, b) = (strip_phone(a), strip_phone(b));
    if !a.chars().any(|c| c.is_ascii_digit()) || !b.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    a == b || a.ends_with(&b) || b.ends_with(&a)
}

/// Equal iff both have the same number of words and every word of `a`
/// occurs in `b`, in any order.
///
/// This is a containment check, not multiset equality: "Ana Ana Lopez" and
/// "Ana Lopez Lopez" compare equal.
pub fn names_equal(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let words_a: Vec<&str> = a.split_whitespace().collect();
    let words_b: Vec<&str> = b.split_whitespace().collect();

    words_a.len() == words_b.len() && words_a.iter().all(|w| words_b.contains(w))
}

/// Keep digits and a single leading '+'.
fn strip_phone(value: &str) -> String {
    let value = value.trim();
    let mut out = String::with_capacity(value.len());
    if value.starts_with('+') {
        out.push('+');
    }
    out.extend(value.chars().filter(|c| c.is_ascii_digit()));
    out
}

/// Parse `y/m/d`, or `m/d/y` / `d/m/y` depending on `order`, with '/', '-'
/// and '.' as interchangeable separators.
pub fn parse_date(value: &str, order: DateOrder) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.trim().split(['/', '-', '.']).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let (year, month, day) = if parts[0].len() == 4 {
        (parts[0].parse().ok()?, parts[1].parse().ok()?, parts[2].parse().ok()?)
    } else {
        let (month, day) = match order {
            DateOrder::MonthFirst => (parts[0], parts[1]),
            DateOrder::DayFirst => (parts[1], parts[0]),
        };
        (parse_year(parts[2])?, month.parse().ok()?, day.parse().ok()?)
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 {
        // Two-digit year: 00-49 -> 2000s, 50-99 -> 1900s
        Some(if year < 50 { 2000 + year } else { 1900 + year })
    } else {
        Some(year)
    }
}
