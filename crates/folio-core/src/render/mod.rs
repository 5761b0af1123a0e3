pub mod pdftoppm;

use crate::error::FolioError;

/// A single page rasterised to PNG.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page_number: usize,
    pub dpi: u32,
    pub png: Vec<u8>,
}

/// Trait for page-to-image backends.
pub trait PageRenderer: Send + Sync {
    /// Render the 1-based `page_number` of the PDF as a PNG image.
    fn render_page(&self, pdf_bytes: &[u8], page_number: usize)
        -> Result<RenderedPage, FolioError>;

    /// Name of this rendering backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
