//! # File Backend
//!
//! Plain-text persistence: one element description per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::errors::{StorageError, StorageResult};
use super::{BackendKind, PersistenceBackend, SaveOutcome};
use crate::document::Document;

/// Default output file for the file backend
pub const DEFAULT_OUTPUT: &str = "document.txt";

/// Writes documents to a single file, truncating it on every save
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document<W: Write>(out: &mut W, document: &Document) -> io::Result<()> {
        for line in document.describe_lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl PersistenceBackend for FileBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::File
    }

    fn save(&self, document: &Document) -> StorageResult<SaveOutcome> {
        let file = File::create(&self.path).map_err(|source| {
            log::error!("Failed to open {} for writing: {}", self.path.display(), source);
            StorageError::ResourceOpen {
                path: self.path.clone(),
                source,
            }
        })?;

        // The writer owns the handle, so it is closed on every return below
        let mut writer = BufWriter::new(file);
        Self::write_document(&mut writer, document).map_err(|source| {
            log::error!("Failed to write {}: {}", self.path.display(), source);
            StorageError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        log::info!(
            "Saved {} element(s) to {}",
            document.len(),
            self.path.display()
        );

        Ok(SaveOutcome {
            backend: BackendKind::File,
            elements: document.len(),
            persisted: true,
            target: Some(self.path.clone()),
        })
    }
}
