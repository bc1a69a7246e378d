//! Tests for tree structure, element data, and inline styles.

use ruler_dom::{DomTree, ElementData, ElementHost, InlineStyle, NodeId, NodeType, Rect};

/// Helper to append an element with a class list.
fn append(tree: &mut DomTree, parent: NodeId, tag: &str, class: &str) -> NodeId {
    let mut element = ElementData::new(tag);
    if !class.is_empty() {
        element = element.with_attr("class", class);
    }
    tree.append_element(parent, element)
}

fn html_body(tree: &mut DomTree) -> (NodeId, NodeId) {
    let html = append(tree, NodeId::ROOT, "html", "");
    let body = append(tree, html, "body", "");
    (html, body)
}

#[test]
fn test_append_sets_parent_and_children() {
    let mut tree = DomTree::new();
    let (html, body) = html_body(&mut tree);

    assert_eq!(tree.parent(body), Some(html));
    assert_eq!(tree.children(html), &[body]);
    assert_eq!(tree.document_element(), Some(html));
    assert_eq!(tree.body(), Some(body));
}

#[test]
fn test_ancestors_walk_to_document() {
    let mut tree = DomTree::new();
    let (html, body) = html_body(&mut tree);
    let div = append(&mut tree, body, "div", "");
    let span = append(&mut tree, div, "span", "");

    let chain: Vec<NodeId> = tree.ancestors(span).collect();
    assert_eq!(chain, vec![div, body, html, NodeId::ROOT]);
    assert!(tree.is_descendant_of(span, body));
    assert!(!tree.is_descendant_of(body, span));
}

#[test]
fn test_remove_child_detaches_subtree() {
    let mut tree = DomTree::new();
    let (_, body) = html_body(&mut tree);
    let div = append(&mut tree, body, "div", "");
    let inner = append(&mut tree, div, "p", "");

    tree.remove_child(body, div);

    assert!(tree.children(body).is_empty());
    assert_eq!(tree.parent(div), None);
    // The detached subtree keeps its own structure.
    assert_eq!(tree.parent(inner), Some(div));
    assert!(!tree.is_connected(inner));
}

#[test]
fn test_remove_child_ignores_non_child() {
    let mut tree = DomTree::new();
    let (html, body) = html_body(&mut tree);
    let div = append(&mut tree, body, "div", "");

    tree.remove_child(html, div);

    assert_eq!(tree.parent(div), Some(body));
}

#[test]
fn test_append_child_moves_node() {
    let mut tree = DomTree::new();
    let (_, body) = html_body(&mut tree);
    let a = append(&mut tree, body, "div", "");
    let b = append(&mut tree, body, "div", "");
    let moving = append(&mut tree, a, "span", "");

    tree.append_child(b, moving);

    assert!(tree.children(a).is_empty());
    assert_eq!(tree.children(b), &[moving]);
    assert_eq!(tree.parent(moving), Some(b));
}

#[test]
fn test_inclusive_descendants_tree_order() {
    let mut tree = DomTree::new();
    let (html, body) = html_body(&mut tree);
    let a = append(&mut tree, body, "div", "");
    let a1 = append(&mut tree, a, "span", "");
    let b = append(&mut tree, body, "div", "");

    assert_eq!(
        tree.inclusive_descendants(html),
        vec![html, body, a, a1, b]
    );
}

#[test]
fn test_classes_split_on_whitespace() {
    let element = ElementData::new("div").with_attr("class", "  box\tsquare  card ");
    assert_eq!(element.classes(), vec!["box", "square", "card"]);
    assert!(element.has_class("square"));
    assert!(!element.has_class("squ"));
}

#[test]
fn test_element_by_id_and_describe() {
    let mut tree = DomTree::new();
    let (_, body) = html_body(&mut tree);
    let card = tree.append_element(
        body,
        ElementData::new("DIV")
            .with_attr("id", "card")
            .with_attr("class", "box wide"),
    );

    assert_eq!(tree.element_by_id("card"), Some(card));
    assert_eq!(tree.element_by_id("missing"), None);
    assert_eq!(tree.describe(card), "div#card.box.wide");
    assert_eq!(tree.describe(NodeId::ROOT), "#document");
}

#[test]
fn test_text_nodes_are_not_elements() {
    let mut tree = DomTree::new();
    let (_, body) = html_body(&mut tree);
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    tree.append_child(body, text);

    assert_eq!(tree.as_text(text), Some("hello"));
    assert!(tree.as_element(text).is_none());
    assert!(!tree.has_attribute(text, "id"));
    assert!(tree.class_list(text).is_empty());
}

#[test]
fn test_host_reads_geometry_and_attributes() {
    let mut tree = DomTree::new();
    let (_, body) = html_body(&mut tree);
    let div = tree.append_element(
        body,
        ElementData::new("div")
            .with_attr("data-square", "")
            .with_attr("class", "box")
            .with_bounds(Rect::new(5.0, 6.0, 100.0, 50.0)),
    );

    assert_eq!(tree.parent_of(div), Some(body));
    assert_eq!(tree.bounding_box(div), Rect::new(5.0, 6.0, 100.0, 50.0));
    assert_eq!(tree.class_list(div), vec!["box".to_string()]);
    assert!(tree.has_attribute(div, "data-square"));
    assert_eq!(tree.traversal_root(), Some(body));
}

#[test]
fn test_traversal_root_falls_back_to_document_element() {
    let mut tree = DomTree::new();
    let html = append(&mut tree, NodeId::ROOT, "html", "");
    let _ = append(&mut tree, html, "main", "");

    assert_eq!(tree.traversal_root(), Some(html));
    assert_eq!(tree.parent_of(html), None);
}

#[test]
fn test_aspect_ratio() {
    assert_eq!(Rect::sized(100.0, 50.0).aspect_ratio(), Some(2.0));
    assert_eq!(Rect::sized(100.0, 0.0).aspect_ratio(), None);
    assert_eq!(Rect::sized(0.0, 0.0).aspect_ratio(), None);
}

#[test]
fn test_inline_style_set_replace_remove() {
    let mut style = InlineStyle::default();
    style.set("outline", "2px solid red");
    style.set("transition", "none");
    style.set("outline", "1px dashed blue");

    assert_eq!(style.len(), 2);
    assert_eq!(style.get("outline"), Some("1px dashed blue"));
    assert_eq!(style.css_text(), "outline: 1px dashed blue; transition: none");

    assert_eq!(style.remove("outline"), Some("1px dashed blue".to_string()));
    assert_eq!(style.remove("outline"), None);
    assert_eq!(style.css_text(), "transition: none");
}
