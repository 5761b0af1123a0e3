use super::{validate_name, DocumentStore, StoredObject};
use crate::error::FolioError;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// In-process store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> FolioError {
        FolioError::Io(std::io::Error::other("memory store lock poisoned"))
    }
}

impl DocumentStore for MemoryStore {
    fn upload_if_absent(&self, name: &str, bytes: &[u8]) -> Result<(), FolioError> {
        validate_name(name)?;
        let mut objects = self.objects.write().map_err(|_| Self::poisoned())?;
        match objects.entry(name.to_string()) {
            Entry::Occupied(_) => Err(FolioError::DuplicateName(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(bytes.to_vec());
                tracing::debug!(name, size = bytes.len(), "stored document in memory");
                Ok(())
            }
        }
    }

    fn list(&self) -> Result<Vec<StoredObject>, FolioError> {
        let objects = self.objects.read().map_err(|_| Self::poisoned())?;
        Ok(objects
            .iter()
            .map(|(name, bytes)| StoredObject {
                name: name.clone(),
                size: bytes.len() as u64,
            })
            .collect())
    }

    fn download(&self, name: &str) -> Result<Vec<u8>, FolioError> {
        validate_name(name)?;
        let objects = self.objects.read().map_err(|_| Self::poisoned())?;
        objects
            .get(name)
            .cloned()
            .ok_or_else(|| FolioError::ObjectNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_list_download() {
        let store = MemoryStore::new();
        store.upload_if_absent("b.pdf", b"bbb").unwrap();
        store.upload_if_absent("a.pdf", b"a").unwrap();

        let listing = store.list().unwrap();
        assert_eq!(
            listing,
            vec![
                StoredObject {
                    name: "a.pdf".into(),
                    size: 1
                },
                StoredObject {
                    name: "b.pdf".into(),
                    size: 3
                },
            ]
        );
        assert_eq!(store.download("b.pdf").unwrap(), b"bbb");
    }

    #[test]
    fn test_duplicate_upload_keeps_original() {
        let store = MemoryStore::new();
        store.upload_if_absent("a.pdf", b"first").unwrap();
        let err = store.upload_if_absent("a.pdf", b"second").unwrap_err();
        assert!(matches!(err, FolioError::DuplicateName(ref n) if n == "a.pdf"));
        assert_eq!(store.download("a.pdf").unwrap(), b"first");
    }

    #[test]
    fn test_download_missing() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.download("nope.pdf"),
            Err(FolioError::ObjectNotFound(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }
}
