//! Document Object Model
//!
//! Elements and the document that owns them.

pub mod element;
pub mod model;

pub use element::Element;
pub use model::Document;
