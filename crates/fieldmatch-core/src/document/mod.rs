//! Page feed seam between a document loader and the extractor.

mod dump;

pub use dump::{DocumentDump, PageNotFound};

pub use crate::error::SourceError as BoxError;
use crate::models::page::PageContent;

/// Supplies per-page annotations and positioned text for one document.
///
/// Implementations wrap whatever actually decodes the document. The extractor
/// awaits pages strictly in order, `1..=page_count()`.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Identifier of the document (usually its file name).
    fn name(&self) -> &str;

    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Load the content of a page (1-indexed).
    async fn load_page(&mut self, page: u32) -> Result<PageContent, BoxError>;
}
