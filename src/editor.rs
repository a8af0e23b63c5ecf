//! Document Editor
//!
//! Facade pairing a borrowed document with a shared persistence backend.

use crate::document::{Document, Element};
use crate::storage::{PersistenceBackend, SaveOutcome, StorageResult};

/// Editing session over one document
///
/// The editor borrows the document mutably for its whole lifetime, so it can
/// never outlive it. The backend is borrowed shared and may serve other
/// editors at the same time.
#[derive(Debug)]
pub struct Editor<'a> {
    document: &'a mut Document,
    backend: &'a dyn PersistenceBackend,
}

impl<'a> Editor<'a> {
    pub fn new(document: &'a mut Document, backend: &'a dyn PersistenceBackend) -> Self {
        Self { document, backend }
    }

    /// Append a text element
    pub fn add_text(&mut self, content: impl Into<String>) {
        self.document.append(Element::text(content));
    }

    /// Append an image element
    pub fn add_image(&mut self, path: impl Into<String>) {
        self.document.append(Element::image(path));
    }

    /// Persist the document through the backend, returning its outcome as is
    pub fn save(&self) -> StorageResult<SaveOutcome> {
        log::debug!(
            "Saving {} element(s) with the {} backend",
            self.document.len(),
            self.backend.kind()
        );
        self.backend.save(self.document)
    }

    pub fn document(&self) -> &Document {
        self.document
    }
}
