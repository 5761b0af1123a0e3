#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("page rendering failed: {0}")]
    Render(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    ToolNotFound { tool: &'static str },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("page {page} is out of range (document has {page_count} page(s))")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("a document named '{0}' already exists in the store")]
    DuplicateName(String),

    #[error("no document named '{0}' in the store")]
    ObjectNotFound(String),

    #[error("invalid document name '{0}'")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
