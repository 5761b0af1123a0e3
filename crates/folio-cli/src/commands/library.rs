use folio_core::error::FolioError;
use folio_core::extraction::pdftotext::PdftotextExtractor;
use folio_core::extraction::{select_page, PdfExtractor};
use folio_core::library::{
    format_size, Document, Library, LibraryFilter, LibraryStats, MAX_UPLOAD_BATCH,
};
use folio_core::search::PageView;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Debug, Serialize)]
pub struct LibraryReport {
    pub stats: LibraryStats,
    pub files: Vec<FileReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<ReadFailure>,
}

#[derive(Debug, Serialize)]
pub struct ReadFailure {
    pub name: String,
    pub error: String,
}

/// Documents read from one upload batch of paths.
#[derive(Debug, Default)]
pub struct BatchRead {
    pub documents: Vec<Document>,
    pub failures: Vec<ReadFailure>,
    /// Paths past the ceiling, never opened.
    pub skipped: usize,
}

/// Read at most `ceiling` paths. A file that cannot be read is recorded as a
/// failure and the rest of the batch is still read.
pub fn read_batch(paths: &[PathBuf], ceiling: usize) -> BatchRead {
    let mut batch = BatchRead {
        skipped: paths.len().saturating_sub(ceiling),
        ..Default::default()
    };

    for path in paths.iter().take(ceiling) {
        let name = display_name(path);
        match std::fs::read(path) {
            Ok(bytes) => batch.documents.push(Document::new(name, bytes)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read document");
                batch.failures.push(ReadFailure {
                    name,
                    error: FolioError::from(e).to_string(),
                });
            }
        }
    }

    batch
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<PageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn run(
    pdf_files: Vec<PathBuf>,
    filter: &LibraryFilter,
    term: &str,
    page: usize,
    output_format: &str,
) -> Result<(), FolioError> {
    let batch = read_batch(&pdf_files, MAX_UPLOAD_BATCH);

    let mut library = Library::with_ceiling(MAX_UPLOAD_BATCH);
    library.add_batch(batch.documents);
    if output_format != "json" {
        for doc in library.documents() {
            println!("File '{}' added.", doc.name);
        }
        for failure in &batch.failures {
            println!("File '{}' skipped: {}", failure.name, failure.error);
        }
        if batch.skipped > 0 {
            println!("{} file(s) over the upload limit were skipped.", batch.skipped);
        }
        println!();
    }

    let selected = library.filter(filter);
    let stats = LibraryStats::of(&selected);
    let extractor = PdftotextExtractor::new();

    let files = selected
        .iter()
        .map(|doc| {
            let mut report = FileReport {
                name: doc.name.clone(),
                size: doc.size(),
                page_count: None,
                view: None,
                error: None,
            };
            // Failures are per file; the rest of the library is still shown.
            match inspect(doc, &extractor, page, term) {
                Ok((count, view)) => {
                    report.page_count = Some(count);
                    report.view = Some(view);
                }
                Err(e) => {
                    tracing::warn!(name = %doc.name, error = %e, "could not search document");
                    report.error = Some(e.to_string());
                }
            }
            report
        })
        .collect();

    let report = LibraryReport {
        stats,
        files,
        unreadable: batch.failures,
    };
    match output_format {
        "json" => output::json::print(&report)?,
        _ => print_table(&report, page),
    }

    Ok(())
}

/// Page count and the search view of the selected page.
fn inspect(
    doc: &Document,
    extractor: &dyn PdfExtractor,
    page: usize,
    term: &str,
) -> Result<(usize, PageView), FolioError> {
    let pages = extractor.extract_pages(&doc.bytes)?;
    let content = select_page(&pages, page)?;
    Ok((pages.len(), PageView::build(&content.lines, term)))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_table(report: &LibraryReport, page: usize) {
    println!("Total files: {}", report.stats.total_files);
    println!("Total size: {}", format_size(report.stats.total_bytes));
    println!(
        "Estimated search time: {:.2} sec",
        report.stats.estimated_search_secs
    );

    if report.files.is_empty() {
        println!("\nNo files match the current filter. Try adding files or adjusting filters.");
        return;
    }

    for file in &report.files {
        println!("\n--- File: {} ({}) ---\n", file.name, format_size(file.size));
        if let Some(ref e) = file.error {
            println!("  {e}");
            continue;
        }
        if let Some(count) = file.page_count {
            println!("Page {page} of {count}");
        }
        if let Some(ref view) = file.view {
            println!("{}", output::table::format_view(view));
        }
    }
}
