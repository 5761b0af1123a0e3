//! Integration tests for search_pdf_page() end-to-end.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use folio_core::error::FolioError;
use folio_core::extraction::{PageContent, PdfExtractor};
use folio_core::library::{Document, Library, LibraryFilter, LibraryStats};
use folio_core::search::PageView;
use folio_core::storage::{DocumentStore, MemoryStore};
use folio_core::{extract_page, page_count, search_pdf_page};

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FolioError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FolioError> {
        Err(FolioError::ToolNotFound { tool: "pdftotext" })
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

fn two_page_report() -> MockExtractor {
    MockExtractor {
        pages: vec![
            page(
                1,
                &[
                    "Quarterly Report",
                    "Revenue grew in every region.",
                    "See appendix (a.b) for details.",
                ],
            ),
            page(
                2,
                &[
                    "Appendix",
                    "The cat category was dropped.",
                    "Cat food sales: up 4%.",
                    "Our CAT index tracks the cat market.",
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Page search
// ---------------------------------------------------------------------------
#[test]
fn search_selected_page_highlights_whole_words() {
    let extractor = two_page_report();
    let view = search_pdf_page(&[], &extractor, 2, "cat").unwrap();

    match view {
        PageView::Matches {
            count,
            lines,
            highlighted,
        } => {
            assert_eq!(count, 3);
            assert_eq!(lines[0], "The cat category was dropped.");
            assert_eq!(highlighted[0], "The <mark>cat</mark> category was dropped.");
            assert_eq!(highlighted[1], "<mark>Cat</mark> food sales: up 4%.");
            assert_eq!(
                highlighted[2],
                "Our <mark>CAT</mark> index tracks the <mark>cat</mark> market."
            );
        }
        other => panic!("expected matches, got {:?}", other),
    }
}

#[test]
fn search_only_looks_at_selected_page() {
    let extractor = two_page_report();
    let view = search_pdf_page(&[], &extractor, 1, "cat").unwrap();
    assert_eq!(view, PageView::NoMatches);
}

#[test]
fn empty_term_returns_full_page_text() {
    let extractor = two_page_report();
    let view = search_pdf_page(&[], &extractor, 1, "").unwrap();
    assert_eq!(
        view,
        PageView::FullText {
            text: "Quarterly Report\nRevenue grew in every region.\nSee appendix (a.b) for details."
                .into()
        }
    );
}

#[test]
fn metacharacters_in_term_are_literal() {
    let extractor = two_page_report();
    let view = search_pdf_page(&[], &extractor, 1, "(a.b)").unwrap();
    assert_eq!(
        view.to_markup(),
        "See appendix <mark>(a.b)</mark> for details."
    );

    let view = search_pdf_page(&[], &extractor, 1, "4%").unwrap();
    assert_eq!(view, PageView::NoMatches);
    let view = search_pdf_page(&[], &extractor, 2, "4%").unwrap();
    assert_eq!(view.to_markup(), "Cat food sales: up <mark>4%</mark>.");
}

#[test]
fn page_out_of_range_is_an_error() {
    let extractor = two_page_report();
    for n in [0, 3] {
        match search_pdf_page(&[], &extractor, n, "cat") {
            Err(FolioError::PageOutOfRange { page, page_count }) => {
                assert_eq!(page, n);
                assert_eq!(page_count, 2);
            }
            other => panic!("expected PageOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn extractor_errors_propagate() {
    let err = search_pdf_page(&[], &FailingExtractor, 1, "cat").unwrap_err();
    assert!(matches!(err, FolioError::ToolNotFound { tool: "pdftotext" }));
    assert!(err.to_string().contains("poppler"));
}

#[test]
fn page_helpers() {
    let extractor = two_page_report();
    assert_eq!(page_count(&[], &extractor).unwrap(), 2);
    assert_eq!(extract_page(&[], &extractor, 2).unwrap().lines[0], "Appendix");
}

// ---------------------------------------------------------------------------
// Library + store flow
// ---------------------------------------------------------------------------
#[test]
fn library_documents_can_be_filtered_stored_and_searched() {
    let store = MemoryStore::new();
    let mut library = Library::new();
    library.add_batch(vec![
        Document::new("report-q1.pdf", vec![1; 2048]),
        Document::new("notes.pdf", vec![2; 10]),
        Document::new("Report-q2.pdf", vec![3; 4096]),
    ]);

    let filter = LibraryFilter {
        name_query: "report".into(),
        ..Default::default()
    };
    let selected = library.filter(&filter);
    let stats = LibraryStats::of(&selected);
    assert_eq!(stats.total_files, 2);
    assert_eq!(stats.total_bytes, 6144);
    assert_eq!(stats.estimated_search_secs, 1.0);

    for doc in &selected {
        store.upload_if_absent(&doc.name, &doc.bytes).unwrap();
    }
    // Re-uploading is reported per document and leaves the store unchanged.
    assert!(matches!(
        store.upload_if_absent("report-q1.pdf", b"other"),
        Err(FolioError::DuplicateName(_))
    ));

    let names: Vec<_> = store.list().unwrap().into_iter().map(|o| o.name).collect();
    assert_eq!(names, vec!["Report-q2.pdf", "report-q1.pdf"]);

    let bytes = store.download("report-q1.pdf").unwrap();
    let extractor = two_page_report();
    let view = search_pdf_page(&bytes, &extractor, 1, "REVENUE").unwrap();
    assert_eq!(view.to_markup(), "<mark>Revenue</mark> grew in every region.");
}
