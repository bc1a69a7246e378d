//! Capability interface over a host document.
//!
//! The traversal and square detection algorithms only need four questions
//! answered about a node. Putting them behind a trait lets the same code run
//! against [`DomTree`], a browser binding, or a hand-built mock in tests.

use crate::{DomTree, NodeId, Rect};

/// Read-only view of the element tree.
pub trait ElementHost {
    /// Handle to a node in this host.
    type Node: Copy + Eq;

    /// `node.parentElement`, or `None` at the top of the tree.
    fn parent_of(&self, node: Self::Node) -> Option<Self::Node>;

    /// `node.getBoundingClientRect()`
    fn bounding_box(&self, node: Self::Node) -> Rect;

    /// `node.classList`
    fn class_list(&self, node: Self::Node) -> Vec<String>;

    /// `node.hasAttribute(name)`
    fn has_attribute(&self, node: Self::Node, name: &str) -> bool;

    /// The node an upward walk stops at (the document body in a browser).
    fn traversal_root(&self) -> Option<Self::Node>;
}

impl ElementHost for DomTree {
    type Node = NodeId;

    /// Stops at the document element: the Document node is not an element.
    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parent(node)
            .filter(|&parent| self.as_element(parent).is_some())
    }

    fn bounding_box(&self, node: NodeId) -> Rect {
        self.as_element(node).map(|e| e.bounds).unwrap_or_default()
    }

    fn class_list(&self, node: NodeId) -> Vec<String> {
        self.as_element(node)
            .map(|e| e.classes().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.as_element(node).is_some_and(|e| e.has_attribute(name))
    }

    /// The body element; documents without one stop at the document element.
    fn traversal_root(&self) -> Option<NodeId> {
        self.body().or_else(|| self.document_element())
    }
}
