//! Persistence Backends
//!
//! A backend stores a document's element descriptions, one per line, in
//! document order. Backends are stateless and shared by reference, so one
//! backend can serve several editors.

pub mod database;
pub mod errors;
pub mod file;

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::config::Config;
use crate::document::Document;

pub use database::DatabaseBackend;
pub use errors::{StorageError, StorageResult};
pub use file::FileBackend;

/// Which backend to persist with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    File,
    Database,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::File => f.write_str("file"),
            BackendKind::Database => f.write_str("database"),
        }
    }
}

/// What a successful `save` did, for the caller to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub backend: BackendKind,
    /// Number of elements handed to the backend
    pub elements: usize,
    /// `false` when the backend only simulated the write
    pub persisted: bool,
    pub target: Option<PathBuf>,
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.backend, &self.target) {
            (BackendKind::File, Some(path)) => {
                write!(f, "[FileStorage] Document saved to {}", path.display())
            }
            (BackendKind::File, None) => write!(f, "[FileStorage] Document saved"),
            (BackendKind::Database, _) => {
                write!(f, "[DBStorage] Document saved to database (simulated).")
            }
        }
    }
}

/// Capability to store a document
pub trait PersistenceBackend: fmt::Debug {
    /// Which kind of backend this is
    fn kind(&self) -> BackendKind;

    /// Store every element description of `document`, one per line, in order
    fn save(&self, document: &Document) -> StorageResult<SaveOutcome>;
}

/// Build the backend selected by `config`
pub fn backend_for(config: &Config) -> Box<dyn PersistenceBackend> {
    match config.backend {
        BackendKind::File => Box::new(FileBackend::new(config.output.clone())),
        BackendKind::Database => Box::new(DatabaseBackend::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let file = SaveOutcome {
            backend: BackendKind::File,
            elements: 2,
            persisted: true,
            target: Some(PathBuf::from("document.txt")),
        };
        assert_eq!(
            file.to_string(),
            "[FileStorage] Document saved to document.txt"
        );

        let db = SaveOutcome {
            backend: BackendKind::Database,
            elements: 2,
            persisted: false,
            target: None,
        };
        assert_eq!(
            db.to_string(),
            "[DBStorage] Document saved to database (simulated)."
        );
    }

    #[test]
    fn test_backend_for_selects_kind() {
        let mut config = Config::default();
        assert_eq!(backend_for(&config).kind(), BackendKind::File);

        config.backend = BackendKind::Database;
        assert_eq!(backend_for(&config).kind(), BackendKind::Database);
    }
}
