//! Document Model
//!
//! An ordered, append-only sequence of elements.

use super::element::Element;

/// One editable document
///
/// Elements keep their insertion order. There is no removal or reordering;
/// the only mutation is [`Document::append`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the end of the document
    pub fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Read-only view of the elements in insertion order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Descriptions of every element, in order
    pub fn describe_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.elements.iter().map(Element::describe)
    }
}
