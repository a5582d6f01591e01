//! Persistence adapter: writes finished documents to disk.

use rowgen_emit::Document;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// A document could not be written.
#[derive(Debug, thiserror::Error)]
#[error("Failed to write {}: {source}", path.display())]
pub struct PersistenceError {
    /// Path that was being written
    pub path: PathBuf,
    /// Underlying IO error
    #[source]
    pub source: std::io::Error,
}

impl PersistenceError {
    fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Destination for finished documents.
pub trait DocumentSink {
    /// Write the whole document under `file_name`, returning its absolute path.
    fn write(&self, file_name: &str, document: &Document) -> Result<PathBuf, PersistenceError>;
}

/// Writes documents into a directory.
///
/// The document is written to a temporary file in the target directory and
/// renamed over the target, so a failed write never leaves a partial
/// document behind. Existing files are replaced.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(".")
    }
}

impl DocumentSink for FileSink {
    fn write(&self, file_name: &str, document: &Document) -> Result<PathBuf, PersistenceError> {
        let target = self.dir.join(file_name);

        fs::create_dir_all(&self.dir).map_err(|e| PersistenceError::new(&self.dir, e))?;

        let mut temp =
            NamedTempFile::new_in(&self.dir).map_err(|e| PersistenceError::new(&target, e))?;
        debug!("Staging document in {}", temp.path().display());

        temp.write_all(document.as_str().as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| PersistenceError::new(&target, e))?;

        temp.persist(&target)
            .map_err(|e| PersistenceError::new(&target, e.error))?;

        let path = fs::canonicalize(&target).map_err(|e| PersistenceError::new(&target, e))?;

        info!(
            "Wrote {} document ({} bytes) to {}",
            document.format(),
            document.len(),
            path.display()
        );

        Ok(path)
    }
}
