//! Console Rendering
//!
//! Human-readable view of a document, framed by header and footer markers.

use std::io::{self, Write};

use crate::document::Document;

pub const RENDER_HEADER: &str = "--- Document Render ---";
pub const RENDER_FOOTER: &str = "-----------------------";

/// Renders one borrowed document
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    document: &'a Document,
}

impl<'a> Renderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Write the framed rendering of every element to `out`
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", RENDER_HEADER)?;
        for element in self.document.elements() {
            element.render(out)?;
        }
        writeln!(out, "{}", RENDER_FOOTER)?;
        out.flush()
    }

    /// Render to a `String`
    pub fn render_to_string(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_frames_elements_in_order() {
        let mut doc = Document::new();
        doc.append(Element::text("Welcome"));
        doc.append(Element::image("pic1.png"));

        let rendered = Renderer::new(&doc)
            .render_to_string()
            .expect("render to string");
        assert_eq!(
            rendered,
            "--- Document Render ---\nText: Welcome\nImage: pic1.png\n-----------------------\n"
        );
    }

    #[test]
    fn test_render_empty_document() {
        let rendered = Renderer::new(&Document::new())
            .render_to_string()
            .expect("render to string");
        assert_eq!(rendered, format!("{}\n{}\n", RENDER_HEADER, RENDER_FOOTER));
    }

    #[test]
    fn test_render_propagates_sink_errors() {
        let doc = Document::new();
        let err = Renderer::new(&doc)
            .render(&mut BrokenSink)
            .expect_err("sink is broken");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
