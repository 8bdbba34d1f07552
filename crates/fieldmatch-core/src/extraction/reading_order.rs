//! Deterministic reading order for positioned tokens.
//!
//! Page coordinates grow upwards, so reading top to bottom means descending
//! `y`. The order is built in two steps:
//!
//! 1. Tokens are sorted by descending `y` (ties by ascending `x`, then input
//!    order).
//! 2. Walking that sequence, a token joins the current line while its `y` is
//!    within `tolerance` of the line's first token; otherwise it starts a new
//!    line. Each line is then sorted by ascending `x` (ties keep step 1 order).
//!
//! Unlike a pairwise "same line if close enough" comparator this is a total
//! order, so the result never depends on the sort algorithm.

use std::cmp::Ordering;

use crate::models::page::TextToken;

/// Order of tokens within a single line: left to right.
pub fn line_order(a: &TextToken, b: &TextToken) -> Ordering {
    a.x.total_cmp(&b.x)
}

/// Order of tokens before line grouping: top to bottom, then left to right.
pub fn vertical_order(a: &TextToken, b: &TextToken) -> Ordering {
    b.y.total_cmp(&a.y).then_with(|| line_order(a, b))
}

/// Return the tokens of a page in reading order.
pub fn reading_order(tokens: &[TextToken], tolerance: f32) -> Vec<&TextToken> {
    let mut by_y: Vec<&TextToken> = tokens.iter().collect();
    by_y.sort_by(|a, b| vertical_order(a, b));

    let mut ordered = Vec::with_capacity(by_y.len());
    let mut line: Vec<&TextToken> = Vec::new();
    let mut line_y = f32::NAN;

    for token in by_y {
        if !line.is_empty() && (line_y - token.y).abs() > tolerance {
            line.sort_by(|a, b| line_order(a, b));
            ordered.append(&mut line);
        }
        if line.is_empty() {
            line_y = token.y;
        }
        line.push(token);
    }

    line.sort_by(|a, b| line_order(a, b));
    ordered.append(&mut line);
    ordered
}
