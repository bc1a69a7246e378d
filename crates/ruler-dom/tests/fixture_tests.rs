//! Tests for JSON fixture loading.

use ruler_dom::{FixtureError, NodeId, Rect, parse_fixture};

#[test]
fn test_body_root_is_wrapped_in_html() {
    let tree = parse_fixture(
        r#"{
            "tag": "body",
            "rect": { "width": 800, "height": 600 },
            "children": [
                { "tag": "div", "attrs": { "id": "card", "class": "box" },
                  "rect": { "x": 10, "y": 20, "width": 200, "height": 200 } }
            ]
        }"#,
    )
    .unwrap();

    let html = tree.document_element().unwrap();
    assert_eq!(tree.as_element(html).unwrap().tag_name, "html");
    let body = tree.body().unwrap();
    let card = tree.element_by_id("card").unwrap();
    assert_eq!(tree.parent(card), Some(body));
    assert_eq!(
        tree.as_element(card).unwrap().bounds,
        Rect::new(10.0, 20.0, 200.0, 200.0)
    );
}

#[test]
fn test_html_root_becomes_document_element() {
    let tree = parse_fixture(r#"{ "tag": "html", "children": [ { "tag": "body" } ] }"#).unwrap();
    let html = tree.document_element().unwrap();
    assert_eq!(tree.parent(html), Some(NodeId::ROOT));
    assert!(tree.body().is_some());
}

#[test]
fn test_text_entries_become_text_nodes() {
    let tree = parse_fixture(
        r#"{ "tag": "body", "children": [ { "text": "hello" } ] }"#,
    )
    .unwrap();
    let body = tree.body().unwrap();
    let text = tree.children(body)[0];
    assert_eq!(tree.as_text(text), Some("hello"));
}

#[test]
fn test_empty_tag_is_rejected() {
    let err = parse_fixture(r#"{ "tag": "body", "children": [ { "tag": " " } ] }"#).unwrap_err();
    assert!(matches!(err, FixtureError::EmptyTag));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = parse_fixture("{ not json").unwrap_err();
    assert!(matches!(err, FixtureError::Json(_)));
}
