//! # Storage Errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// The output resource could not be opened for writing; nothing was written
    #[error("could not open {} for writing", path.display())]
    ResourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing failed after the resource was opened
    #[error("failed writing to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Path of the resource involved in the failure
    pub fn path(&self) -> &Path {
        match self {
            StorageError::ResourceOpen { path, .. } | StorageError::Write { path, .. } => {
                path.as_path()
            }
        }
    }

    pub fn is_open_failure(&self) -> bool {
        matches!(self, StorageError::ResourceOpen { .. })
    }
}
