//! Session document library: the files a user has added, with filtering
//! by name and size and simple aggregate statistics.

use serde::{Deserialize, Serialize};

/// Maximum number of documents accepted from one upload batch.
pub const MAX_UPLOAD_BATCH: usize = 10;

/// Rough per-document cost used for the search time estimate.
pub const SEARCH_SECS_PER_FILE: f64 = 0.5;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Document {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn size_mb(&self) -> f64 {
        self.size() as f64 / BYTES_PER_MB
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReport {
    pub accepted: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryFilter {
    /// Case-insensitive substring of the document name.
    pub name_query: String,
    pub min_size_mb: f64,
    pub max_size_mb: f64,
}

impl Default for LibraryFilter {
    fn default() -> Self {
        LibraryFilter {
            name_query: String::new(),
            min_size_mb: 0.0,
            max_size_mb: 100.0,
        }
    }
}

impl LibraryFilter {
    pub fn accepts(&self, doc: &Document) -> bool {
        let size_mb = doc.size_mb();
        doc.name
            .to_lowercase()
            .contains(&self.name_query.to_lowercase())
            && self.min_size_mb <= size_mb
            && size_mb <= self.max_size_mb
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total_files: usize,
    pub total_bytes: u64,
    pub estimated_search_secs: f64,
}

impl LibraryStats {
    pub fn of(docs: &[&Document]) -> Self {
        LibraryStats {
            total_files: docs.len(),
            total_bytes: docs.iter().map(|d| d.size()).sum(),
            estimated_search_secs: docs.len() as f64 * SEARCH_SECS_PER_FILE,
        }
    }
}

/// Documents added during one session, in upload order.
#[derive(Debug, Clone)]
pub struct Library {
    documents: Vec<Document>,
    ceiling: usize,
}

impl Default for Library {
    fn default() -> Self {
        Self::with_ceiling(MAX_UPLOAD_BATCH)
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ceiling(ceiling: usize) -> Self {
        Library {
            documents: Vec::new(),
            ceiling,
        }
    }

    /// Add one upload batch. Documents past the ceiling are dropped; repeated
    /// names are kept as separate entries.
    pub fn add_batch(&mut self, batch: Vec<Document>) -> UploadReport {
        let dropped = batch.len().saturating_sub(self.ceiling);
        if dropped > 0 {
            tracing::warn!(
                ceiling = self.ceiling,
                dropped,
                "upload batch exceeds ceiling, extra documents ignored"
            );
        }

        let before = self.documents.len();
        self.documents.extend(batch.into_iter().take(self.ceiling));
        let accepted = self.documents.len() - before;

        for doc in &self.documents[before..] {
            tracing::info!(name = %doc.name, size = doc.size(), "document added");
        }

        UploadReport { accepted, dropped }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn filter(&self, filter: &LibraryFilter) -> Vec<&Document> {
        self.documents.iter().filter(|d| filter.accepts(d)).collect()
    }
}

/// Byte count as megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}
