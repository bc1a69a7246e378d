//! Tests for snippet generation.

use ruler_geometry::{
    BoxStack, Measurements, PLACEHOLDER, Strategy, generate_snippet, generate_snippets,
    parse_box_fields,
};
use strum::IntoEnumIterator;

fn stack(boxes: &[&str]) -> BoxStack {
    let mut stack = BoxStack::new();
    for raw in boxes {
        let _ = stack.push(parse_box_fields(raw).expect("valid box fields"));
    }
    stack
}

#[test]
fn test_empty_stack_yields_placeholders() {
    let snippets = generate_snippets(&BoxStack::new());
    for snippet in &snippets {
        assert_eq!(snippet, PLACEHOLDER);
    }
}

#[test]
fn test_absolute_single_box() {
    let snippet = generate_snippet(&stack(&["10px,5px,,20px"]), Strategy::Absolute);
    assert_eq!(
        snippet,
        "<div style=\"\n  position: absolute;\n  top: 10px;\n  left: 20px;\n  margin-top: 10px;\n  margin-right: 5px;\n  margin-bottom: 0;\n  margin-left: 20px;\n\"></div>"
    );
}

#[test]
fn test_flex_grid_margin_templates() {
    let boxes = stack(&["1rem,2rem,3rem,4rem"]);
    let flex = generate_snippet(&boxes, Strategy::Flexbox);
    assert!(flex.contains("display: flex;"));
    assert!(flex.contains("margin: 1rem 2rem 3rem 4rem;"));

    let grid = generate_snippet(&boxes, Strategy::Grid);
    assert!(grid.contains("display: grid;"));
    assert!(grid.contains("top: 1rem;"));

    let margin = generate_snippet(&boxes, Strategy::Margin);
    assert!(!margin.contains("display"));
    assert!(margin.contains("position: relative;"));
    assert!(margin.contains("left: 4rem;"));
}

#[test]
fn test_unset_renders_as_zero() {
    let boxes = stack(&[",,,7px"]);
    let margin = generate_snippet(&boxes, Strategy::Margin);
    assert!(margin.contains("top: 0;"));
    assert!(margin.contains("margin: 0 0 0 7px;"));
}

#[test]
fn test_every_snippet_carries_every_value() {
    let boxes = stack(&["11px,,33px,44px"]);
    for strategy in Strategy::iter() {
        let snippet = generate_snippet(&boxes, strategy);
        for value in ["11px", "33px", "44px"] {
            assert!(snippet.contains(value), "{strategy} is missing {value}");
        }
        // The unset right edge renders as a bare zero.
        let zero = if strategy == Strategy::Absolute {
            "margin-right: 0;"
        } else {
            "margin: 11px 0 33px 44px;"
        };
        assert!(snippet.contains(zero), "{strategy} is missing {zero}");
    }
}

#[test]
fn test_values_are_substituted_verbatim() {
    let mut boxes = BoxStack::new();
    let _ = boxes.push(Measurements::from_fields("<b>", "", "", ""));
    assert!(generate_snippet(&boxes, Strategy::Grid).contains("top: <b>;"));
}

#[test]
fn test_container_wraps_only_with_multiple_boxes() {
    let one = stack(&["10px,,,"]);
    assert!(!generate_snippet(&one, Strategy::Margin).contains("padding"));

    let three = stack(&["10px,,,", "20px,,,", "30px,5px,,"]);
    let snippet = generate_snippet(&three, Strategy::Margin);
    let mut lines = snippet.lines();
    assert_eq!(lines.next(), Some("<div style=\""));
    assert!(snippet.contains("  padding: 30px 5px 0 0;"));
    // Inner element comes from box 0 and is indented one level.
    assert!(snippet.contains("    top: 10px;"));
    assert!(!snippet.contains("20px"));
    assert!(snippet.ends_with("  \"></div>\n</div>"));
}

#[test]
fn test_snippets_are_in_strategy_order() {
    let boxes = stack(&["1px,2px,3px,4px"]);
    let snippets = generate_snippets(&boxes);
    for strategy in Strategy::iter() {
        assert_eq!(snippets[strategy.index()], generate_snippet(&boxes, strategy));
    }
    assert_eq!(Strategy::Flexbox.to_string(), "flexbox");
}

#[test]
fn test_strategy_names_parse() {
    assert_eq!("grid".parse::<Strategy>(), Ok(Strategy::Grid));
    assert_eq!("Absolute".parse::<Strategy>(), Ok(Strategy::Absolute));
    assert!("table".parse::<Strategy>().is_err());
}
