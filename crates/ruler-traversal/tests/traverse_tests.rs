//! Tests for the ancestor walk and the square predicate.

use std::collections::HashMap;

use ruler_dom::{DomTree, ElementData, ElementHost, NodeId, Rect};
use ruler_traversal::square::has_square_ratio;
use ruler_traversal::{collect_ancestors, is_square_like, traverse_ancestors};

/// Minimal host: a parent table plus per-node signals.
#[derive(Default)]
struct MockHost {
    parents: HashMap<u32, u32>,
    rects: HashMap<u32, Rect>,
    classes: HashMap<u32, Vec<String>>,
    attributes: HashMap<u32, Vec<String>>,
    root: Option<u32>,
}

impl MockHost {
    /// `start(1) -> A(2) -> B(3) -> C(4) -> root(5)`, where A and C carry
    /// the "square" class.
    fn chain() -> Self {
        let mut host = Self::default();
        for (child, parent) in [(1, 2), (2, 3), (3, 4), (4, 5)] {
            let _ = host.parents.insert(child, parent);
        }
        let _ = host.classes.insert(2, vec!["square".to_string()]);
        let _ = host.classes.insert(4, vec!["square".to_string()]);
        host.root = Some(5);
        host
    }
}

impl ElementHost for MockHost {
    type Node = u32;

    fn parent_of(&self, node: u32) -> Option<u32> {
        self.parents.get(&node).copied()
    }

    fn bounding_box(&self, node: u32) -> Rect {
        self.rects.get(&node).copied().unwrap_or_default()
    }

    fn class_list(&self, node: u32) -> Vec<String> {
        self.classes.get(&node).cloned().unwrap_or_default()
    }

    fn has_attribute(&self, node: u32, name: &str) -> bool {
        self.attributes
            .get(&node)
            .is_some_and(|attrs| attrs.iter().any(|a| a == name))
    }

    fn traversal_root(&self) -> Option<u32> {
        self.root
    }
}

#[test]
fn test_chain_visits_matches_then_root() {
    let host = MockHost::chain();
    let mut visits = Vec::new();
    traverse_ancestors(&host, Some(1), is_square_like, |node, index| {
        visits.push((node, index));
    });
    assert_eq!(visits, vec![(2, 0), (4, 1), (5, 2)]);
}

#[test]
fn test_start_is_never_visited() {
    let mut host = MockHost::chain();
    let _ = host.classes.insert(1, vec!["square".to_string()]);
    let visited = collect_ancestors(&host, Some(1), is_square_like);
    assert!(!visited.contains(&1));
}

#[test]
fn test_absent_start_is_noop() {
    let host = MockHost::chain();
    let mut called = false;
    traverse_ancestors(&host, None, |_: &MockHost, _| true, |_, _| called = true);
    assert!(!called);
}

#[test]
fn test_root_is_visited_regardless_of_predicate() {
    let host = MockHost::chain();
    let visited = collect_ancestors(&host, Some(1), |_: &MockHost, _| false);
    assert_eq!(visited, vec![5]);
}

#[test]
fn test_detached_walk_never_reaches_root() {
    let mut host = MockHost::chain();
    let _ = host.parents.remove(&4);
    let visited = collect_ancestors(&host, Some(1), |_: &MockHost, _| true);
    assert_eq!(visited, vec![2, 3, 4]);
}

#[test]
fn test_start_at_root_visits_nothing_above() {
    let host = MockHost::chain();
    assert!(collect_ancestors(&host, Some(5), |_: &MockHost, _| true).is_empty());
}

#[test]
fn test_square_signals_are_independent() {
    let mut host = MockHost::default();
    // Ratio alone.
    let _ = host.rects.insert(1, Rect::sized(100.0, 100.0));
    // Class alone, far from square.
    let _ = host.rects.insert(2, Rect::sized(400.0, 20.0));
    let _ = host.classes.insert(2, vec!["card".to_string(), "box".to_string()]);
    // Attribute alone.
    let _ = host.rects.insert(3, Rect::sized(400.0, 20.0));
    let _ = host.attributes.insert(3, vec!["data-container".to_string()]);
    // Nothing.
    let _ = host.rects.insert(4, Rect::sized(400.0, 20.0));
    let _ = host.classes.insert(4, vec!["boxy".to_string()]);

    assert!(is_square_like(&host, 1));
    assert!(is_square_like(&host, 2));
    assert!(is_square_like(&host, 3));
    assert!(!is_square_like(&host, 4));
}

#[test]
fn test_square_ratio_bounds() {
    assert!(has_square_ratio(&Rect::sized(80.0, 100.0)));
    assert!(has_square_ratio(&Rect::sized(120.0, 100.0)));
    assert!(!has_square_ratio(&Rect::sized(79.0, 100.0)));
    assert!(!has_square_ratio(&Rect::sized(121.0, 100.0)));
    assert!(!has_square_ratio(&Rect::sized(10.0, 0.0)));
    assert!(!has_square_ratio(&Rect::sized(0.0, 0.0)));
}

#[test]
fn test_dom_tree_walk_stops_at_body() {
    let mut tree = DomTree::new();
    let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
    let body = tree.append_element(html, ElementData::new("body"));
    let outer = tree.append_element(
        body,
        ElementData::new("section").with_bounds(Rect::sized(300.0, 300.0)),
    );
    let middle = tree.append_element(
        outer,
        ElementData::new("div").with_bounds(Rect::sized(300.0, 40.0)),
    );
    let inner = tree.append_element(
        middle,
        ElementData::new("div")
            .with_attr("data-square", "")
            .with_bounds(Rect::sized(300.0, 40.0)),
    );
    let button = tree.append_element(inner, ElementData::new("button"));

    let visited = collect_ancestors(&tree, Some(button), is_square_like);
    assert_eq!(visited, vec![inner, outer, body]);
}
