use folio_core::error::FolioError;
use folio_core::extraction::pdftotext::PdftotextExtractor;
use folio_core::render::pdftoppm::PdftoppmRenderer;
use folio_core::render::PageRenderer;
use std::path::PathBuf;

use crate::output;

pub fn pages(pdf_file: PathBuf) -> Result<(), FolioError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let count = folio_core::page_count(&pdf_bytes, &extractor)?;
    println!("{count}");
    Ok(())
}

pub fn text(pdf_file: PathBuf, page: usize, layout: bool) -> Result<(), FolioError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new().with_layout(layout);
    let content = folio_core::extract_page(&pdf_bytes, &extractor, page)?;
    println!("{}", content.text());
    Ok(())
}

pub fn search(
    pdf_file: PathBuf,
    term: &str,
    page: usize,
    output_format: &str,
) -> Result<(), FolioError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = PdftotextExtractor::new();
    let view = folio_core::search_pdf_page(&pdf_bytes, &extractor, page, term)?;

    match output_format {
        "json" => output::json::print(&view)?,
        _ => println!("{}", output::table::format_view(&view)),
    }

    Ok(())
}

pub fn render(pdf_file: PathBuf, page: usize, dpi: u32, out: PathBuf) -> Result<(), FolioError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let renderer = PdftoppmRenderer::new(dpi);
    let rendered = renderer.render_page(&pdf_bytes, page)?;
    std::fs::write(&out, &rendered.png)?;
    eprintln!(
        "Page {} rendered at {} dpi, written to {}",
        rendered.page_number,
        rendered.dpi,
        out.display()
    );
    Ok(())
}
