pub mod pdftotext;

use crate::error::FolioError;
use serde::{Deserialize, Serialize};

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-based.
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FolioError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a page by its 1-based number.
pub fn select_page(pages: &[PageContent], page_number: usize) -> Result<&PageContent, FolioError> {
    page_number
        .checked_sub(1)
        .and_then(|i| pages.get(i))
        .ok_or(FolioError::PageOutOfRange {
            page: page_number,
            page_count: pages.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(n: usize) -> Vec<PageContent> {
        (1..=n)
            .map(|i| PageContent {
                page_number: i,
                lines: vec![format!("page {i}")],
            })
            .collect()
    }

    #[test]
    fn test_select_page_is_one_based() {
        let pages = pages(3);
        assert_eq!(select_page(&pages, 1).unwrap().lines[0], "page 1");
        assert_eq!(select_page(&pages, 3).unwrap().lines[0], "page 3");
    }

    #[test]
    fn test_select_page_out_of_range() {
        let pages = pages(2);
        for n in [0, 3] {
            match select_page(&pages, n) {
                Err(FolioError::PageOutOfRange { page, page_count }) => {
                    assert_eq!(page, n);
                    assert_eq!(page_count, 2);
                }
                other => panic!("expected PageOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_page_text_joins_lines() {
        let page = PageContent {
            page_number: 1,
            lines: vec!["a".into(), "b".into()],
        };
        assert_eq!(page.text(), "a\nb");
    }
}
