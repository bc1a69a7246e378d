//! The default traversal predicate.

use std::ops::RangeInclusive;

use ruler_dom::{ElementHost, Rect};

/// Width/height ratios that count as square.
pub const SQUARE_RATIO: RangeInclusive<f32> = 0.8..=1.2;

/// Class names that mark an element as a square container.
pub const SQUARE_CLASSES: [&str; 3] = ["square", "box", "container"];

/// Attributes that mark an element as a square container.
pub const SQUARE_ATTRIBUTES: [&str; 2] = ["data-square", "data-container"];

/// Whether the box is roughly square. A zero or non-finite ratio is not.
#[must_use]
pub fn has_square_ratio(rect: &Rect) -> bool {
    rect.aspect_ratio()
        .is_some_and(|ratio| SQUARE_RATIO.contains(&ratio))
}

/// Any one of three independent signals suffices: a near-square bounding
/// box, a marker class, or a marker attribute.
#[must_use]
pub fn is_square_like<H: ElementHost + ?Sized>(host: &H, node: H::Node) -> bool {
    if has_square_ratio(&host.bounding_box(node)) {
        return true;
    }
    if host
        .class_list(node)
        .iter()
        .any(|class| SQUARE_CLASSES.contains(&class.as_str()))
    {
        return true;
    }
    SQUARE_ATTRIBUTES
        .iter()
        .any(|attr| host.has_attribute(node, attr))
}
