//! In-memory page feed, loadable from a JSON dump.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{BoxError, PageSource};
use crate::error::Result;
use crate::models::page::PageContent;

/// A requested page is not part of the dump.
#[derive(Error, Debug)]
#[error("page {page} not found (document has {count} pages)")]
pub struct PageNotFound {
    pub page: u32,
    pub count: u32,
}

/// Pre-decoded document content.
///
/// This is the format written by external loaders: a document name and its
/// pages with form annotations and positioned tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDump {
    /// Document identifier.
    pub name: String,

    /// Pages in the document.
    #[serde(default)]
    pub pages: Vec<PageContent>,
}

impl DocumentDump {
    pub fn new(name: impl Into<String>, pages: Vec<PageContent>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Parse a dump from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dump from a JSON file.
    ///
    /// The file stem is used as the name when the dump does not carry one.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut dump = Self::from_json(&content)?;

        if dump.name.is_empty() {
            dump.name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
        }

        debug!("Loaded dump {} with {} pages", dump.name, dump.pages.len());
        Ok(dump)
    }
}

impl PageSource for DocumentDump {
    fn name(&self) -> &str {
        &self.name
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    async fn load_page(&mut self, page: u32) -> std::result::Result<PageContent, BoxError> {
        let count = self.page_count();
        let content = self
            .pages
            .iter()
            .find(|p| p.number == page)
            .cloned()
            .ok_or(PageNotFound { page, count })?;
        Ok(content)
    }
}
