//! Headless DOM tree for the ruler tools.
//!
//! A pared-down [DOM Living Standard](https://dom.spec.whatwg.org/) tree:
//! documents, elements, and text, plus the presentation state the traversal
//! tools read and write (a bounding box and an inline style block per
//! element).
//!
//! # Design
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`], so parent
//! and child links are plain indices. [`Page`] adds click listeners and
//! event dispatch on top of a tree, and [`ElementHost`] exposes the
//! read-only queries the traversal algorithm is written against.

pub mod fixture;
pub mod host;
pub mod page;
pub mod rect;
pub mod style;

pub use fixture::{FixtureError, FixtureNode, load_fixture, parse_fixture};
pub use host::ElementHost;
pub use page::{ListenerId, MouseEvent, Page};
pub use rect::Rect;
pub use style::InlineStyle;

use std::collections::HashMap;

/// Attribute name to value.
pub type AttributesMap = HashMap<String, String>;

/// Index of a node in its [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The Document node. Every tree allocates it first.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is, with its payload.
    pub node_type: NodeType,
    /// `None` for the Document and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in tree order.
    pub children: Vec<NodeId>,
}

/// The node kinds fixtures can produce. Comments, doctypes, and the rest
/// never reach this tree.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// Character data.
    Text(String),
}

/// Per-element state.
///
/// Besides the tag name and attribute list, each element carries the
/// geometry a layout pass would have produced (`bounds`) and its inline
/// `style` attribute in parsed form.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Local name, as written in the fixture.
    pub tag_name: String,
    /// Attributes, including `id` and `class`.
    pub attrs: AttributesMap,
    /// Border box in page coordinates, as `getBoundingClientRect()` reports it.
    pub bounds: Rect,
    /// Declarations set through the element's `style` object.
    pub style: InlineStyle,
}

impl ElementData {
    /// Create an element with no attributes and an empty bounding box.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// Builder: set the bounding box.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id").map(String::as_str)
    }

    /// `classList`: the whitespace-separated tokens of `class`, in source
    /// order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attrs
            .get("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// `classList.contains(name)`
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes().contains(&name)
    }

    /// `hasAttribute(name)`
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }
}

/// The node arena.
///
/// The Document node is always at index 0 ([`NodeId::ROOT`]). Nodes removed
/// from the tree keep their slot; they are simply detached.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// A tree holding only the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Node lookup; `None` for ids from another tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Mutable node lookup.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Number of allocated nodes, attached or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a tree built with [`DomTree::new`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached node to the arena.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Allocate an element and append it to `parent` in one step.
    pub fn append_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        let id = self.alloc(NodeType::Element(element));
        self.append_child(parent, id);
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// Appends `child` as the last child of `parent`. A child that is still
    /// attached elsewhere is detached from its old parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detach `child` from `parent`. Does nothing if `child` is not a child
    /// of `parent`. The subtree below `child` stays intact.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(parent_node) = self.nodes.get_mut(parent.0) else {
            return;
        };
        let before = parent_node.children.len();
        parent_node.children.retain(|&c| c != child);
        if parent_node.children.len() != before {
            self.nodes[child.0].parent = None;
        }
    }

    /// Parent link, which may be the Document.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children in tree order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Whether `id` is reachable from the Document node.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        id == NodeId::ROOT || self.is_descendant_of(id, NodeId::ROOT)
    }

    /// Parent, grandparent, and so on up to the topmost node.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// `id` and every node below it, in tree order (pre-order).
    #[must_use]
    pub fn inclusive_descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Element payload, or `None` for documents and text.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Mutable element payload.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Text payload.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// First element child of the Document.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// First `body` or `frameset` child of the document element.
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;

        self.children(html)
            .iter()
            .find(|&&id| {
                self.as_element(id).is_some_and(|e| {
                    e.tag_name.eq_ignore_ascii_case("body")
                        || e.tag_name.eq_ignore_ascii_case("frameset")
                })
            })
            .copied()
    }

    /// `document.getElementById(id)` over connected elements.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.inclusive_descendants(NodeId::ROOT)
            .into_iter()
            .find(|&node| self.as_element(node).and_then(ElementData::id) == Some(id))
    }

    /// Short human label for diagnostics: `tag#id.class1.class2`.
    #[must_use]
    pub fn describe(&self, id: NodeId) -> String {
        match self.get(id).map(|n| &n.node_type) {
            Some(NodeType::Element(data)) => {
                let mut label = data.tag_name.to_ascii_lowercase();
                if let Some(el_id) = data.id() {
                    label.push('#');
                    label.push_str(el_id);
                }
                for class in data.classes() {
                    label.push('.');
                    label.push_str(class);
                }
                label
            }
            Some(NodeType::Document) => "#document".to_string(),
            Some(NodeType::Text(_)) => "#text".to_string(),
            None => format!("<missing node {}>", id.0),
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Returned by [`DomTree::ancestors`].
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
