//! Document Editor
//!
//! A small document model with pluggable persistence.
//!
//! This library provides:
//! - Typed document elements (text, image) and an append-only document
//! - Persistence backends (plain-text file, simulated database)
//! - Console rendering
//! - An editor facade tying a document to a backend
//! - Configuration management

pub mod config;
pub mod document;
pub mod editor;
pub mod render;
pub mod storage;

// Re-exports for clean public API
pub use config::Config;
pub use document::{Document, Element};
pub use editor::Editor;
pub use render::Renderer;
pub use storage::{
    BackendKind, DatabaseBackend, FileBackend, PersistenceBackend, SaveOutcome, StorageError,
};
