use super::{validate_name, DocumentStore, StoredObject};
use crate::error::FolioError;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Store backed by a flat directory, one file per document.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open the store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, FolioError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "opened directory store");
        Ok(DirectoryStore { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentStore for DirectoryStore {
    fn upload_if_absent(&self, name: &str, bytes: &[u8]) -> Result<(), FolioError> {
        validate_name(name)?;
        let path = self.root.join(name);

        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(FolioError::DuplicateName(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = file.write_all(bytes) {
            // A partial file would block later uploads under this name.
            drop(file);
            let _ = std::fs::remove_file(&path);
            return Err(e.into());
        }

        tracing::info!(name, size = bytes.len(), "uploaded document");
        Ok(())
    }

    fn list(&self) -> Result<Vec<StoredObject>, FolioError> {
        let mut objects = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            objects.push(StoredObject {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: meta.len(),
            });
        }
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(objects)
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        validate_name(name)?;
        match std::fs::read(self.root.join(name)) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FolioError::ObjectNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
