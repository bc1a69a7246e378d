//! Tests for adjacent-box edge differences.

use ruler_css::{Length, LengthUnit};
use ruler_geometry::derive::{edge_delta, position_summary};
use ruler_geometry::{BoxId, BoxStack, Edge, Measurements, derive_adjacency};

fn px(value: f64) -> Option<Length> {
    Some(Length::new(value, LengthUnit::Px))
}

fn stack(boxes: &[(&str, &str, &str, &str)]) -> BoxStack {
    let mut stack = BoxStack::new();
    for &(top, right, bottom, left) in boxes {
        let _ = stack.push(Measurements::from_fields(top, right, bottom, left));
    }
    stack
}

#[test]
fn test_single_box_has_no_adjacency() {
    assert!(derive_adjacency(&stack(&[("1px", "", "", "")])).is_empty());
    assert!(derive_adjacency(&BoxStack::new()).is_empty());
}

#[test]
fn test_sign_rule_per_edge() {
    let boxes = stack(&[
        ("30px", "10px", "15px", "40px"),
        ("10px", "25px", "20px", "5px"),
    ]);
    let records = derive_adjacency(&boxes);
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.index, 0);
    assert_eq!(record.child, BoxId(1));
    assert_eq!(record.parent, BoxId(2));
    // top/left: child - parent
    assert_eq!(record.deltas.top, px(20.0));
    assert_eq!(record.deltas.left, px(35.0));
    // right/bottom: parent - child
    assert_eq!(record.deltas.right, px(15.0));
    assert_eq!(record.deltas.bottom, px(5.0));
}

#[test]
fn test_one_record_per_enclosed_box() {
    let boxes = stack(&[
        ("3px", "", "", ""),
        ("2px", "", "", ""),
        ("1px", "", "", ""),
    ]);
    let records = derive_adjacency(&boxes);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].index, 1);
    assert_eq!(records[1].child, BoxId(2));
    assert_eq!(records[1].parent, BoxId(3));
    assert_eq!(records[1].deltas.get(Edge::Top), px(1.0));
}

#[test]
fn test_unset_edge_is_not_applicable() {
    let boxes = stack(&[("10px", "", "", ""), ("", "", "", "4px")]);
    let deltas = derive_adjacency(&boxes)[0].deltas;
    assert_eq!(deltas.top, None);
    assert_eq!(deltas.right, None);
    assert_eq!(deltas.bottom, None);
    assert_eq!(deltas.left, None);
}

#[test]
fn test_zero_is_not_unset() {
    let child = Measurements::from_fields("0", "", "", "");
    let parent = Measurements::from_fields("0px", "", "", "");
    assert_eq!(edge_delta(Edge::Top, &child, &parent), px(0.0));
}

#[test]
fn test_mismatched_units_are_not_applicable() {
    ruler_common::warning::set_quiet(true);
    let child = Measurements::from_fields("2em", "", "", "");
    let parent = Measurements::from_fields("10px", "", "", "");
    assert_eq!(edge_delta(Edge::Top, &child, &parent), None);
    assert!(ruler_common::warning::has_warned(
        "Geometry",
        "top units differ: '2em' vs '10px'"
    ));
}

#[test]
fn test_unparsable_values_are_not_applicable() {
    ruler_common::warning::set_quiet(true);
    let child = Measurements::from_fields("", "auto", "", "");
    let parent = Measurements::from_fields("", "10px", "", "");
    assert_eq!(edge_delta(Edge::Right, &child, &parent), None);
}

#[test]
fn test_relative_units_subtract_in_their_unit() {
    let child = Measurements::from_fields("", "", "", "2.5rem");
    let parent = Measurements::from_fields("", "", "", "1rem");
    let delta = edge_delta(Edge::Left, &child, &parent).expect("same unit");
    assert_eq!(delta.unit, LengthUnit::Rem);
    assert_eq!(delta.to_string(), "1.5rem");
}

#[test]
fn test_position_summary_uses_leading_integers() {
    let boxes = stack(&[("12.7px", "abc", "", "-3em")]);
    let summary = position_summary(&boxes.as_slice()[0]);
    assert_eq!(summary.x, -3);
    assert_eq!(summary.y, 12);
    assert_eq!(summary.margin_top, 12);
    assert_eq!(summary.margin_right, 0);
    assert_eq!(summary.margin_bottom, 0);
    assert_eq!(summary.margin_left, -3);
}
