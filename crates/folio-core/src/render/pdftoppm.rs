use crate::error::FolioError;
use crate::render::{PageRenderer, RenderedPage};
use std::io::Write;
use std::path::Path;
use std::process::Command;

const TOOL: &str = "pdftoppm";
const OUTPUT_STEM: &str = "page";

pub const DEFAULT_DPI: u32 = 150;

/// Page renderer using pdftoppm (from poppler-utils).
#[derive(Debug, Clone)]
pub struct PdftoppmRenderer {
    dpi: u32,
}

impl PdftoppmRenderer {
    pub fn new(dpi: u32) -> Self {
        PdftoppmRenderer { dpi: dpi.max(1) }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    fn args(&self, pdf_path: &Path, out_prefix: &Path, page_number: usize) -> Vec<String> {
        let page = page_number.to_string();
        vec![
            "-png".into(),
            "-r".into(),
            self.dpi.to_string(),
            "-f".into(),
            page.clone(),
            "-l".into(),
            page,
            "-singlefile".into(),
            pdf_path.display().to_string(),
            out_prefix.display().to_string(),
        ]
    }
}

impl Default for PdftoppmRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

impl PageRenderer for PdftoppmRenderer {
    fn render_page(
        &self,
        pdf_bytes: &[u8],
        page_number: usize,
    ) -> Result<RenderedPage, FolioError> {
        if page_number == 0 {
            return Err(FolioError::Render("page numbers start at 1".into()));
        }

        let workdir = tempfile::tempdir().map_err(|e| FolioError::Render(e.to_string()))?;
        let pdf_path = workdir.path().join("input.pdf");
        let mut pdf_file = std::fs::File::create(&pdf_path)?;
        pdf_file.write_all(pdf_bytes)?;
        drop(pdf_file);

        let out_prefix = workdir.path().join(OUTPUT_STEM);
        let output = Command::new(TOOL)
            .args(self.args(&pdf_path, &out_prefix, page_number))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FolioError::ToolNotFound { tool: TOOL }
                } else {
                    FolioError::Render(format!("pdftoppm failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(FolioError::ToolFailed {
                tool: TOOL,
                code,
                stderr,
            });
        }

        // pdftoppm exits 0 without writing anything when the page is past the end.
        let png_path = out_prefix.with_extension("png");
        let png = std::fs::read(&png_path).map_err(|_| {
            FolioError::Render(format!("pdftoppm produced no image for page {page_number}"))
        })?;

        tracing::debug!(page = page_number, dpi = self.dpi, bytes = png.len(), "rendered page");
        Ok(RenderedPage {
            page_number,
            dpi: self.dpi,
            png,
        })
    }

    fn backend_name(&self) -> &str {
        TOOL
    }
}
