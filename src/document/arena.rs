//! Arena-backed in-memory document tree.
//!
//! Nodes live in a single `Vec` and refer to each other by index. Every node keeps links to its
//! parent, first and last child, and both neighbouring siblings, so sibling scans are a pointer
//! walk and insertions never move existing nodes.

use super::{DocumentTree, NewElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a node in its [`Document`].
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    text: String,
    source: Option<String>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl From<NewElement> for NodeData {
    fn from(element: NewElement) -> Self {
        Self {
            tag: element.tag.to_ascii_lowercase(),
            attributes: element.attributes,
            text: element.text,
            source: element.source,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

#[derive(Clone, Debug)]
/// Owned document tree rooted at an `html` element holding a `body`.
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Empty document: `html > body`.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: vec![NewElement::new("html").into()],
            root: NodeId(0),
            body: NodeId(0),
        };
        let body = doc.create_element(NewElement::new("body"));
        doc.append_child(doc.root, body);
        doc.body = body;
        doc
    }

    #[must_use]
    /// The `html` element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    /// The `body` element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create `element` and append it to `parent`, returning the new node.
    pub fn append_new(&mut self, parent: NodeId, element: NewElement) -> NodeId {
        let node = self.create_element(element);
        self.append_child(parent, node);
        node
    }

    #[must_use]
    /// Parent of `node`, `None` for the root and for detached nodes.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).parent
    }

    #[must_use]
    /// Sibling immediately preceding `node`.
    pub fn prev_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).prev_sibling
    }

    /// Children of `node` in document order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.data(node).first_child, move |&n| {
            self.data(n).next_sibling
        })
    }

    #[must_use]
    /// Whether `node` was parsed from source rather than created during generation.
    pub fn is_source(&self, node: NodeId) -> bool {
        self.data(node).source.is_some()
    }

    /// Render the body back to text.
    ///
    /// Parsed nodes are written verbatim; created elements are written as HTML markup and kept
    /// apart from their neighbours by a blank line so the result remains valid markdown.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        let mut pending_gap = false;

        for child in self.children(self.body) {
            if pending_gap {
                out.push('\n');
                pending_gap = false;
            }
            if let Some(source) = &self.data(child).source {
                out.push_str(source);
                continue;
            }
            if !out.is_empty() {
                while !out.ends_with("\n\n") {
                    out.push('\n');
                }
            }
            self.write_markup(child, &mut out);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            pending_gap = true;
        }

        out
    }

    #[must_use]
    /// Render `node` and its descendants as HTML markup.
    pub fn markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_markup(node, &mut out);
        out
    }

    fn write_markup(&self, node: NodeId, out: &mut String) {
        let data = self.data(node);
        if let Some(source) = &data.source {
            out.push_str(source);
            return;
        }

        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(html_escape::encode_double_quoted_attribute(value).as_ref());
            out.push('"');
        }
        out.push('>');

        let block = is_block(&data.tag);
        if data.tag == "script" {
            out.push_str(&data.text);
        } else {
            out.push_str(html_escape::encode_text(&data.text).as_ref());
        }
        if block && data.first_child.is_some() {
            out.push('\n');
        }
        for child in self.children(node) {
            self.write_markup(child, out);
        }

        out.push_str("</");
        out.push_str(&data.tag);
        out.push('>');
        if block {
            out.push('\n');
        }
    }

    fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.0]
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.0]
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let data = self.data(node);
        if let Some(id) = selector.strip_prefix('#') {
            data.attributes.iter().any(|(k, v)| k == "id" && v == id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.attributes
                .iter()
                .any(|(k, v)| k == "class" && v.split_whitespace().any(|c| c == class))
        } else {
            data.tag.eq_ignore_ascii_case(selector)
        }
    }

    fn is_detached(&self, node: NodeId) -> bool {
        node != self.root && self.data(node).parent.is_none()
    }
}

fn is_block(tag: &str) -> bool {
    matches!(tag, "div" | "ol" | "ul" | "li" | "script")
}

impl DocumentTree for Document {
    type Node = NodeId;

    fn select(&self, selector: &str) -> Option<NodeId> {
        let selector = selector.trim();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if self.matches(node, selector) {
                return Some(node);
            }
            let mut children: Vec<NodeId> = self.children(node).collect();
            children.reverse();
            stack.extend(children);
        }
        None
    }

    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).first_child
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        self.data(node).next_sibling
    }

    fn tag(&self, node: NodeId) -> &str {
        &self.data(node).tag
    }

    fn text(&self, node: NodeId) -> String {
        let mut text = self.data(node).text.clone();
        for child in self.children(node) {
            text.push_str(&self.text(child));
        }
        text
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.data(node)
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn create_element(&mut self, element: NewElement) -> NodeId {
        self.nodes.push(element.into());
        NodeId(self.nodes.len() - 1)
    }

    fn insert_before(&mut self, reference: NodeId, node: NodeId) {
        let Some(parent) = self.data(reference).parent else {
            log::warn!("Cannot insert before detached node {reference:?}");
            return;
        };
        if !self.is_detached(node) {
            log::warn!("Node {node:?} is already attached");
            return;
        }

        let prev = self.data(reference).prev_sibling;
        {
            let data = self.data_mut(node);
            data.parent = Some(parent);
            data.prev_sibling = prev;
            data.next_sibling = Some(reference);
        }
        self.data_mut(reference).prev_sibling = Some(node);
        match prev {
            Some(prev) => self.data_mut(prev).next_sibling = Some(node),
            None => self.data_mut(parent).first_child = Some(node),
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_detached(child) || child == parent {
            log::warn!("Node {child:?} cannot be appended to {parent:?}");
            return;
        }

        let last = self.data(parent).last_child;
        {
            let data = self.data_mut(child);
            data.parent = Some(parent);
            data.prev_sibling = last;
            data.next_sibling = None;
        }
        match last {
            Some(last) => self.data_mut(last).next_sibling = Some(child),
            None => self.data_mut(parent).first_child = Some(child),
        }
        self.data_mut(parent).last_child = Some(child);
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.data_mut(node).text = text.to_string();
    }

    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let attributes = &mut self.data_mut(node).attributes;
        let Some(index) = attributes.iter().position(|(k, _)| k == "class") else {
            attributes.push(("class".to_string(), class.to_string()));
            return true;
        };

        let mut classes: Vec<&str> = attributes[index].1.split_whitespace().collect();
        let present = if let Some(pos) = classes.iter().position(|c| *c == class) {
            classes.remove(pos);
            false
        } else {
            classes.push(class);
            true
        };

        if classes.is_empty() {
            attributes.remove(index);
        } else {
            attributes[index].1 = classes.join(" ");
        }
        present
    }
}
