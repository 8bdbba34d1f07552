//! Data models for extracted fields, page feeds and comparison reports.

pub mod comparison;
pub mod config;
pub mod field;
pub mod page;
