//! The narrow document-tree interface the traversal runs against.
//!
//! The heading traversal only ever needs to walk siblings forward, read a node's marker kind and
//! text, and insert or append new elements. Keeping that surface behind [`DocumentTree`] lets the
//! same algorithm run against a parsed markdown file or a hand-built tree in tests. Hosts must
//! hand over a fully constructed tree; nothing here waits for a document to become ready.

pub mod arena;

pub use arena::{Document, NodeId};

/// Operations the table of contents needs from a document.
pub trait DocumentTree {
    /// Handle to a node owned by the tree.
    type Node: Copy + Eq + std::fmt::Debug;

    /// First node in document order matching a simple selector: `tag`, `#id` or `.class`.
    fn select(&self, selector: &str) -> Option<Self::Node>;

    /// First child of `node`.
    fn first_child(&self, node: Self::Node) -> Option<Self::Node>;

    /// Sibling immediately following `node`.
    fn next_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    /// Marker kind (tag name) of `node`.
    fn tag(&self, node: Self::Node) -> &str;

    /// Text content of `node` and its descendants.
    fn text(&self, node: Self::Node) -> String;

    /// Value of attribute `name` on `node`.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// Create a detached element.
    fn create_element(&mut self, element: NewElement) -> Self::Node;

    /// Attach the detached `node` immediately before `reference`.
    fn insert_before(&mut self, reference: Self::Node, node: Self::Node);

    /// Attach the detached `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);

    /// Replace the own text of `node`.
    fn set_text(&mut self, node: Self::Node, text: &str);

    /// Add `class` to `node` if absent, remove it otherwise. Returns whether it is now present.
    fn toggle_class(&mut self, node: Self::Node, class: &str) -> bool;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Description of an element to be created in a document.
pub struct NewElement {
    /// Tag name.
    pub tag: String,
    /// Attributes in the order they are written out.
    pub attributes: Vec<(String, String)>,
    /// Own text content.
    pub text: String,
    /// Verbatim source the element was parsed from, written back unchanged.
    pub source: Option<String>,
}

impl NewElement {
    #[must_use]
    /// Element with the given tag and nothing else.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    /// Add an attribute.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    #[must_use]
    /// Set the own text content.
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    /// Record the verbatim source slice the element stands for.
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
