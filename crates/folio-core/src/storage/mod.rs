//! Named document storage.
//!
//! A store is built once by the caller and passed by reference to whatever
//! needs it. `MemoryStore` lives for the process; `DirectoryStore` keeps one
//! file per document under a root directory, like a flat bucket.

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use crate::error::FolioError;
use serde::{Deserialize, Serialize};

/// Listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub name: String,
    pub size: u64,
}

pub trait DocumentStore: Send + Sync {
    /// Store `bytes` under `name`, failing with `DuplicateName` if it exists.
    fn upload_if_absent(&self, name: &str, bytes: &[u8]) -> Result<(), FolioError>;

    /// All stored documents, sorted by name.
    fn list(&self) -> Result<Vec<StoredObject>, FolioError>;

    fn download(&self, name: &str) -> Result<Vec<u8>, FolioError>;
}

/// Reject names that are empty or could escape a flat namespace.
pub fn validate_name(name: &str) -> Result<(), FolioError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(FolioError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("report.pdf").is_ok());
        assert!(validate_name("with space.pdf").is_ok());
        for bad in ["", ".", "..", "a/b.pdf", "..\\x.pdf"] {
            assert!(
                matches!(validate_name(bad), Err(FolioError::InvalidName(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
