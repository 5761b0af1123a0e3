pub mod error;
pub mod extraction;
pub mod library;
pub mod render;
pub mod search;
pub mod storage;

use error::FolioError;
use extraction::{PageContent, PdfExtractor};
use search::PageView;

pub use search::{highlight, match_lines, SearchPattern};

/// Main API entry point: search one page of a PDF for an exact word.
///
/// `page_number` is 1-based. An empty `term` yields the page's full text.
pub fn search_pdf_page(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    page_number: usize,
    term: &str,
) -> Result<PageView, FolioError> {
    let page = extract_page(pdf_bytes, extractor, page_number)?;
    let view = PageView::build(&page.lines, term);
    tracing::debug!(
        backend = extractor.backend_name(),
        page = page_number,
        term,
        "searched page"
    );
    Ok(view)
}

/// Extract a single page's text.
pub fn extract_page(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    page_number: usize,
) -> Result<PageContent, FolioError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    extraction::select_page(&pages, page_number).cloned()
}

/// Number of pages the extractor finds in the PDF.
pub fn page_count(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<usize, FolioError> {
    Ok(extractor.extract_pages(pdf_bytes)?.len())
}
