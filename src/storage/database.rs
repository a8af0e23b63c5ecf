//! # Database Backend (stub)
//!
//! Accepts save requests without persisting anything. Every outcome it
//! returns is marked `persisted: false`.

use super::errors::StorageResult;
use super::{BackendKind, PersistenceBackend, SaveOutcome};
use crate::document::Document;

/// Simulated database storage
#[derive(Debug, Clone, Default)]
pub struct DatabaseBackend;

impl DatabaseBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PersistenceBackend for DatabaseBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Database
    }

    fn save(&self, document: &Document) -> StorageResult<SaveOutcome> {
        log::warn!(
            "Database backend is a stub: {} element(s) were not persisted",
            document.len()
        );

        Ok(SaveOutcome {
            backend: BackendKind::Database,
            elements: document.len(),
            persisted: false,
            target: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;

    #[test]
    fn test_stub_reports_not_persisted() {
        let mut doc = Document::new();
        doc.append(Element::text("a"));

        let outcome = DatabaseBackend::new().save(&doc).expect("stub save");
        assert_eq!(outcome.backend, BackendKind::Database);
        assert_eq!(outcome.elements, 1);
        assert!(!outcome.persisted);
        assert!(outcome.target.is_none());
    }
}
