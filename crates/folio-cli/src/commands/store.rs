use folio_core::error::FolioError;
use folio_core::library::format_size;
use folio_core::storage::{DirectoryStore, DocumentStore};
use std::path::{Path, PathBuf};

use crate::output;

pub fn upload(dir: &Path, files: Vec<PathBuf>) -> Result<(), FolioError> {
    let store = DirectoryStore::open(dir)?;
    let mut uploaded = 0;

    for path in &files {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => {
                eprintln!("  skipped {}: not a file name", path.display());
                continue;
            }
        };
        let bytes = std::fs::read(path)?;
        // Duplicate names are reported and skipped, not fatal.
        match store.upload_if_absent(&name, &bytes) {
            Ok(()) => {
                uploaded += 1;
                println!("Uploaded '{}' ({})", name, format_size(bytes.len() as u64));
            }
            Err(e @ (FolioError::DuplicateName(_) | FolioError::InvalidName(_))) => {
                eprintln!("  skipped: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(uploaded, total = files.len(), store = %dir.display(), "upload finished");
    Ok(())
}

pub fn list(dir: &Path, output_format: &str) -> Result<(), FolioError> {
    let store = DirectoryStore::open(dir)?;
    let objects = store.list()?;

    match output_format {
        "json" => output::json::print(&objects)?,
        _ => println!("{}", output::table::format_objects(&objects)),
    }
    Ok(())
}

pub fn download(dir: &Path, name: &str, out: Option<PathBuf>) -> Result<(), FolioError> {
    let store = DirectoryStore::open(dir)?;
    let bytes = store.download(name)?;
    let out = out.unwrap_or_else(|| PathBuf::from(name));
    std::fs::write(&out, &bytes)?;
    eprintln!(
        "Downloaded '{}' ({}) to {}",
        name,
        format_size(bytes.len() as u64),
        out.display()
    );
    Ok(())
}
