//! HTML/CSS snippet generation.
//!
//! The innermost box supplies the element's offsets and margins. When more
//! than one box exists, the outermost box becomes a positioned container
//! whose padding holds its own measurements. Values are substituted exactly
//! as entered and nothing is escaped: the output is for copying by hand.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::measurement::{Edge, Measurements};
use crate::stack::BoxStack;

/// Returned for every strategy while there are no boxes.
pub const PLACEHOLDER: &str = "<div>No boxes added yet</div>";

/// A positioning approach, in tab order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// `position: absolute` with per-edge margins.
    Absolute,
    /// Flex container, relatively offset.
    Flexbox,
    /// Grid container, relatively offset.
    Grid,
    /// Plain relative offset with margin shorthand.
    Margin,
}

impl Strategy {
    /// Position of this strategy in [`generate_snippets`] output.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

fn element_style(strategy: Strategy, m: &Measurements) -> String {
    let x = m.render(Edge::Left);
    let y = m.render(Edge::Top);
    match strategy {
        Strategy::Absolute => format!(
            "<div style=\"\n  position: absolute;\n  top: {y};\n  left: {x};\n  margin-top: {};\n  margin-right: {};\n  margin-bottom: {};\n  margin-left: {};\n\"></div>",
            m.render(Edge::Top),
            m.render(Edge::Right),
            m.render(Edge::Bottom),
            m.render(Edge::Left),
        ),
        Strategy::Flexbox => format!(
            "<div style=\"\n  display: flex;\n  position: relative;\n  top: {y};\n  left: {x};\n  margin: {};\n\"></div>",
            m.margin_shorthand()
        ),
        Strategy::Grid => format!(
            "<div style=\"\n  display: grid;\n  position: relative;\n  top: {y};\n  left: {x};\n  margin: {};\n\"></div>",
            m.margin_shorthand()
        ),
        Strategy::Margin => format!(
            "<div style=\"\n  position: relative;\n  top: {y};\n  left: {x};\n  margin: {};\n\"></div>",
            m.margin_shorthand()
        ),
    }
}

fn wrap_in_container(container: &Measurements, inner: &str) -> String {
    let indented: Vec<String> = inner.lines().map(|line| format!("  {line}")).collect();
    format!(
        "<div style=\"\n  position: relative;\n  padding: {};\n\">\n{}\n</div>",
        container.margin_shorthand(),
        indented.join("\n")
    )
}

/// Snippet for one strategy.
#[must_use]
pub fn generate_snippet(stack: &BoxStack, strategy: Strategy) -> String {
    let Some(element) = stack.innermost() else {
        return PLACEHOLDER.to_string();
    };
    let body = element_style(strategy, &element.measurements);
    match stack.outermost() {
        Some(container) if stack.len() > 1 => wrap_in_container(&container.measurements, &body),
        _ => body,
    }
}

/// Snippets for all four strategies, in [`Strategy`] order.
#[must_use]
pub fn generate_snippets(stack: &BoxStack) -> [String; 4] {
    let mut out: [String; 4] = Default::default();
    for strategy in Strategy::iter() {
        out[strategy.index()] = generate_snippet(stack, strategy);
    }
    out
}
