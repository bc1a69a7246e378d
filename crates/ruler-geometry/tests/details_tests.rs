//! Tests for the details panel, box list, preview, and field parsing.

use ruler_geometry::details::{NOT_SET, PREVIEW_EMPTY, css_equivalent, list_entry, preview_html};
use ruler_geometry::{
    BoxId, BoxSpecError, BoxStack, DetailsView, Edge, Measurements, details::details_view,
    parse_box_fields,
};

#[test]
fn test_css_equivalent() {
    let m = Measurements::from_fields("5px", "", "1em", "8px");
    assert_eq!(
        css_equivalent(&m),
        "position: relative;\ntop: 5px;\nleft: 8px;\nmargin: 5px 0 1em 8px;"
    );
}

#[test]
fn test_details_view_text() {
    let mut stack = BoxStack::new();
    let _ = stack.push(Measurements::from_fields("1px", "", "", ""));
    let id = stack.push(Measurements::from_fields("", "2px", "", "9px"));

    let view = details_view(&stack, Some(id));
    let DetailsView::Selected(details) = &view else {
        panic!("expected details");
    };
    assert_eq!(details.number, 2);
    assert_eq!(details.measurements.get(Edge::Right), Some("2px"));

    let text = view.to_string();
    assert!(text.starts_with("Box 2 Position Details\n"));
    assert!(text.contains("  X: 9px\n"));
    assert!(text.contains(&format!("  Top: {NOT_SET}\n")));
    assert!(text.contains("  margin: 0 2px 0 9px;\n"));

    assert_eq!(details_view(&stack, None), DetailsView::NothingSelected);
    assert_eq!(details_view(&stack, Some(BoxId(7))), DetailsView::NothingSelected);
}

#[test]
fn test_list_entry_shows_set_right_and_bottom() {
    let mut stack = BoxStack::new();
    let _ = stack.push(Measurements::from_fields("3px", "", "6px", "4px"));
    let entry = list_entry(0, &stack.as_slice()[0]);
    assert_eq!(entry, "Box 1  X: 4px  Y: 3px  B: 6px");
}

#[test]
fn test_preview_nests_outermost_first() {
    assert!(preview_html(&BoxStack::new()).contains(PREVIEW_EMPTY));

    let mut stack = BoxStack::new();
    let _ = stack.push(Measurements::from_fields("10px", "", "", ""));
    let _ = stack.push(Measurements::from_fields("0", "", "", "4px"));
    let html = preview_html(&stack);

    let outer = html.find("data-box-id=\"2\"").expect("outer box rendered");
    let inner = html.find("data-box-id=\"1\"").expect("inner box rendered");
    assert!(outer < inner);
    assert!(html.starts_with("<div class=\"border-blue-500"));
    assert!(html.contains("<span class=\"margin-top\">\u{2195} 10px</span>"));
    assert!(html.contains("<span class=\"margin-left\">\u{2190} 4px</span>"));
    // Unset edges have no indicator.
    assert!(!html.contains("margin-right"));
}

#[test]
fn test_preview_hides_only_literal_zero_px() {
    let mut stack = BoxStack::new();
    let _ = stack.push(Measurements::from_fields("0px", "0", "0em", ""));
    let html = preview_html(&stack);

    assert!(!html.contains("margin-top"));
    assert!(html.contains("<span class=\"margin-right\">0 \u{2192}</span>"));
    assert!(html.contains("<span class=\"margin-bottom\">\u{2195} 0em</span>"));
    assert!(!html.contains("margin-left"));
}

#[test]
fn test_parse_box_fields() {
    let m = parse_box_fields(" 10px , , 2em,").expect("four fields");
    assert_eq!(m.get(Edge::Top), Some("10px"));
    assert_eq!(m.get(Edge::Right), None);
    assert_eq!(m.get(Edge::Bottom), Some("2em"));
    assert_eq!(m.get(Edge::Left), None);

    assert_eq!(parse_box_fields("1px,2px"), Err(BoxSpecError::FieldCount(2)));
    assert_eq!(parse_box_fields(",,,"), Err(BoxSpecError::Empty));
}
