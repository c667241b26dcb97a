//! Tree types for parsed HTML documents.
//!
//! Nodes live in an arena owned by [`Document`] and refer to each other by
//! [`NodeId`]. The tree keeps everything rules need: element attributes in
//! source order (duplicates included), comments, doctypes and template
//! actions, each with the position where it starts.
//!
//! ```text
//! Document
//!  └─ Element "html"
//!       ├─ Element "head"
//!       └─ Element "body"
//!            ├─ Text
//!            ├─ Template "{{ .Title }}"
//!            └─ Element "img" (attrs: src, alt)
//! ```

use serde::{Deserialize, Serialize};

/// A position (line, column, byte offset) in the source text.
///
/// Lines and columns are 1-based; `offset` is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
    /// 0-based byte offset in the source string.
    pub offset: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns true if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Lower-cased attribute name.
    pub name: String,
    /// Attribute value with quotes removed; empty for bare attributes.
    pub value: String,
    /// Where the attribute name starts.
    pub span: Span,
}

/// An element's tag name and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Lower-cased tag name.
    pub name: String,
    /// Attributes in source order; duplicates are preserved.
    pub attrs: Vec<Attribute>,
    /// Whether the start tag ended with `/>`.
    pub self_closing: bool,
}

impl Element {
    /// Returns the first attribute with the given name (case-insensitive).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Returns the value of the first attribute with the given name.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attr(name).map(|a| a.value.as_str())
    }

    /// Returns true if the element carries the attribute, even without a value.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// What a node is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// The document root. Always node 0.
    Document,
    /// An element with its attributes.
    Element(Element),
    /// Character data.
    Text(String),
    /// `<!-- ... -->` contents.
    Comment(String),
    /// `<!DOCTYPE ...>` contents after the keyword.
    Doctype(String),
    /// A `{{ ... }}` template action found in text content.
    Template(String),
}

/// Index of a node inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// This node's id.
    pub id: NodeId,
    /// Node payload.
    pub kind: NodeKind,
    /// Parent node; `None` only for the document root.
    pub parent: Option<NodeId>,
    /// Child nodes in document order.
    pub children: Vec<NodeId>,
    /// Source span of the node (the start tag for elements).
    pub span: Span,
}

impl Node {
    /// Returns the element payload if this is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match &self.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns true if this node is an element with the given tag name.
    #[must_use]
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element()
            .is_some_and(|el| el.name.eq_ignore_ascii_case(tag))
    }

    /// Line where the node starts.
    #[must_use]
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    /// Column where the node starts.
    #[must_use]
    pub fn column(&self) -> usize {
        self.span.start.column
    }
}

/// A parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    nodes: Vec<Node>,
    fragment: bool,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                id: NodeId(0),
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
                span: Span::default(),
            }],
            fragment: true,
        }
    }

    pub(crate) fn append(&mut self, parent: NodeId, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            kind,
            parent: Some(parent),
            children: Vec::new(),
            span,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn set_fragment(&mut self, fragment: bool) {
        self.fragment = fragment;
    }

    /// The document root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the document holds nothing but its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether the input was a partial template with no enclosing `<html>`
    /// element and no doctype.
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        self.fragment
    }

    /// Visits every node below the root in pre-order.
    ///
    /// Returning `false` from the callback skips that node's children.
    pub fn walk<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node) -> bool,
    {
        let mut stack: Vec<NodeId> = self.root().children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if f(node) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
    }

    /// Iterates over all elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = (&Node, &Element)> {
        let mut out = Vec::new();
        self.walk(|node| {
            if let Some(el) = node.as_element() {
                out.push((node, el));
            }
            true
        });
        out.into_iter()
    }

    /// Iterates over the ancestors of a node, nearest first, excluding the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        let mut current = self.get(id).and_then(|n| n.parent);
        std::iter::from_fn(move || {
            let node = self.get(current?)?;
            if matches!(node.kind, NodeKind::Document) {
                return None;
            }
            current = node.parent;
            Some(node)
        })
    }

    /// Returns true if any ancestor is an element with the given tag.
    #[must_use]
    pub fn has_ancestor(&self, id: NodeId, tag: &str) -> bool {
        self.ancestors(id).any(|n| n.is_element(tag))
    }

    /// Concatenated text of a node and all its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = String::new();
        let Some(start) = self.get(id) else {
            return text;
        };
        let mut stack = vec![start.id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            match &node.kind {
                NodeKind::Text(t) => text.push_str(t),
                NodeKind::Template(t) => {
                    text.push_str("{{");
                    text.push_str(t);
                    text.push_str("}}");
                }
                _ => {}
            }
            stack.extend(node.children.iter().rev().copied());
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str) -> NodeKind {
        NodeKind::Element(Element {
            name: name.to_string(),
            attrs: Vec::new(),
            self_closing: false,
        })
    }

    #[test]
    fn test_walk_is_preorder_and_can_prune() {
        let mut doc = Document::new();
        let div = doc.append(NodeId(0), element("div"), Span::default());
        let p = doc.append(div, element("p"), Span::default());
        doc.append(p, NodeKind::Text("hi".into()), Span::default());
        doc.append(NodeId(0), element("footer"), Span::default());

        let mut seen = Vec::new();
        doc.walk(|n| {
            if let Some(el) = n.as_element() {
                seen.push(el.name.clone());
            }
            true
        });
        assert_eq!(seen, vec!["div", "p", "footer"]);

        let mut pruned = Vec::new();
        doc.walk(|n| {
            if let Some(el) = n.as_element() {
                pruned.push(el.name.clone());
                return el.name != "div";
            }
            true
        });
        assert_eq!(pruned, vec!["div", "footer"]);
    }

    #[test]
    fn test_ancestors_stop_at_root() {
        let mut doc = Document::new();
        let form = doc.append(NodeId(0), element("form"), Span::default());
        let div = doc.append(form, element("div"), Span::default());
        let button = doc.append(div, element("button"), Span::default());

        let names: Vec<_> = doc
            .ancestors(button)
            .filter_map(|n| n.as_element().map(|e| e.name.clone()))
            .collect();
        assert_eq!(names, vec!["div", "form"]);
        assert!(doc.has_ancestor(button, "form"));
        assert!(!doc.has_ancestor(form, "form"));
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(Position::new(1, 1, 4), Position::new(1, 6, 9));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }
}
