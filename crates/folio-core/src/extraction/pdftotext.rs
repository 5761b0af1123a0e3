use crate::error::FolioError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;

const TOOL: &str = "pdftotext";

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// By default text is extracted in reading order. With `layout` enabled,
/// `pdftotext -layout` is used to keep the physical column alignment.
#[derive(Debug, Clone, Default)]
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, FolioError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| FolioError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| FolioError::Extraction(e.to_string()))?;

        let mut cmd = Command::new(TOOL);
        if self.layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    FolioError::ToolNotFound { tool: TOOL }
                } else {
                    FolioError::Extraction(format!("pdftotext failed: {}", e))
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

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(pages = pages.len(), bytes = pdf_bytes.len(), "extracted text");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        TOOL
    }
}

/// Split pdftotext output into pages.
///
/// pdftotext ends every page with a form feed, so the segment after the
/// last one is dropped when empty. Page 1 is always returned.
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut segments: Vec<&str> = text.split('\x0c').collect();
    if segments.len() > 1 && segments.last().is_some_and(|s| s.trim().is_empty()) {
        segments.pop();
    }

    segments
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("first\nline two\n\x0csecond page\n\x0c");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].lines, vec!["first", "line two"]);
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].lines, vec!["second page"]);
    }

    #[test]
    fn test_split_pages_keeps_blank_inner_pages() {
        let pages = split_pages("one\n\x0c\x0cthree\n\x0c");
        assert_eq!(pages.len(), 3);
        assert!(pages[1].lines.is_empty());
        assert_eq!(pages[2].lines, vec!["three"]);
    }

    #[test]
    fn test_split_pages_empty_output_has_one_page() {
        let pages = split_pages("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(PdftotextExtractor::new().backend_name(), "pdftotext");
        assert!(PdftotextExtractor::new().with_layout(true).layout);
    }
}
