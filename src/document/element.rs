//! Document Elements
//!
//! The closed set of content kinds a document can hold.

use std::fmt;
use std::io::{self, Write};

/// A single unit of document content
///
/// Elements are immutable once built. Each one has a one-line description
/// tagged with its kind (`Text: ...` / `Image: ...`), used both for console
/// rendering and as its persisted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Inline text content
    Text(String),
    /// Reference to an image by path
    Image(String),
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    pub fn image(path: impl Into<String>) -> Self {
        Element::Image(path.into())
    }

    /// Kind tag used as the description prefix
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "Text",
            Element::Image(_) => "Image",
        }
    }

    /// Payload without the kind tag
    pub fn value(&self) -> &str {
        match self {
            Element::Text(content) => content,
            Element::Image(path) => path,
        }
    }

    /// Stable text representation, e.g. `Text: hello`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Write the description as one line to `out`
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.value())
    }
}
