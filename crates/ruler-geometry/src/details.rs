//! Per-box detail views and the nested preview.

use std::fmt;

use serde::Serialize;

use crate::measurement::{Edge, Measurements};
use crate::stack::{BoxData, BoxId, BoxStack, Position};

/// Shown in place of an unset measurement.
pub const NOT_SET: &str = "Not set";

/// Shown by the preview while there are no boxes.
pub const PREVIEW_EMPTY: &str = "Add boxes to visualize placement";

/// The standalone CSS for one box.
#[must_use]
pub fn css_equivalent(m: &Measurements) -> String {
    format!(
        "position: relative;\ntop: {};\nleft: {};\nmargin: {};",
        m.render(Edge::Top),
        m.render(Edge::Left),
        m.margin_shorthand()
    )
}

/// Everything the details panel shows for the selected box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxDetails {
    /// 1-based nesting number ("Box 1" is innermost).
    pub number: usize,
    /// Box id.
    pub id: BoxId,
    /// Captured coordinates.
    pub position: Position,
    /// Raw measurements.
    pub measurements: Measurements,
    /// Output of [`css_equivalent`].
    pub css: String,
}

impl fmt::Display for BoxDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Box {} Position Details", self.number)?;
        writeln!(f, "  X: {}px", self.position.x)?;
        writeln!(f, "  Y: {}px", self.position.y)?;
        for edge in [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left] {
            let label = match edge {
                Edge::Top => "Top",
                Edge::Right => "Right",
                Edge::Bottom => "Bottom",
                Edge::Left => "Left",
            };
            writeln!(f, "  {label}: {}", self.measurements.get(edge).unwrap_or(NOT_SET))?;
        }
        writeln!(f, "CSS Equivalent")?;
        for line in self.css.lines() {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// State of the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailsView {
    /// There are no boxes at all.
    NoBoxes,
    /// Boxes exist but none is selected (or the selection was removed).
    NothingSelected,
    /// Details of the selected box.
    Selected(BoxDetails),
}

impl fmt::Display for DetailsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBoxes => writeln!(f, "Add boxes to see position details"),
            Self::NothingSelected => writeln!(
                f,
                "Click on a box in the list to see detailed position information"
            ),
            Self::Selected(details) => write!(f, "{details}"),
        }
    }
}

/// Details for `selected`, if it still exists.
#[must_use]
pub fn details_view(stack: &BoxStack, selected: Option<BoxId>) -> DetailsView {
    if stack.is_empty() {
        return DetailsView::NoBoxes;
    }
    let Some(index) = selected.and_then(|id| stack.index_of(id)) else {
        return DetailsView::NothingSelected;
    };
    let data = &stack.as_slice()[index];
    DetailsView::Selected(BoxDetails {
        number: index + 1,
        id: data.id,
        position: data.position,
        measurements: data.measurements.clone(),
        css: css_equivalent(&data.measurements),
    })
}

/// One line of the "Added Boxes" list.
#[must_use]
pub fn list_entry(index: usize, data: &BoxData) -> String {
    let mut line = format!(
        "Box {}  X: {}px  Y: {}px",
        index + 1,
        data.position.x,
        data.position.y
    );
    if let Some(right) = data.measurements.get(Edge::Right) {
        line.push_str(&format!("  R: {right}"));
    }
    if let Some(bottom) = data.measurements.get(Edge::Bottom) {
        line.push_str(&format!("  B: {bottom}"));
    }
    line
}

/// Margin drawn when an edge is unset.
const PREVIEW_ZERO: &str = "0px";

/// Whether an edge deserves a margin indicator in the preview: anything but
/// the literal `0px`.
fn shows_indicator(m: &Measurements, edge: Edge) -> bool {
    m.get(edge).unwrap_or(PREVIEW_ZERO) != PREVIEW_ZERO
}

fn preview_box(index: usize, data: &BoxData, inner: Option<&str>) -> String {
    let m = &data.measurements;
    let mut style = String::from("position: relative;");
    if let Some(top) = m.get(Edge::Top) {
        style.push_str(&format!(" top: {top};"));
    }
    if let Some(left) = m.get(Edge::Left) {
        style.push_str(&format!(" left: {left};"));
    }

    let mut lines = vec![
        format!(
            "<div class=\"{}\" data-box-id=\"{}\" style=\"{style}\">",
            data.tint, data.id.0
        ),
        format!(
            "  <span class=\"label\">Box {}</span> <span class=\"coords\">X: {}px, Y: {}px</span>",
            index + 1,
            data.position.x,
            data.position.y
        ),
    ];
    let indicators = [
        (Edge::Top, "\u{2195} {}"),
        (Edge::Left, "\u{2190} {}"),
        (Edge::Right, "{} \u{2192}"),
        (Edge::Bottom, "\u{2195} {}"),
    ];
    for (edge, pattern) in indicators {
        if shows_indicator(m, edge) {
            let text = pattern.replace("{}", m.render(edge));
            lines.push(format!("  <span class=\"margin-{edge}\">{text}</span>"));
        }
    }
    if let Some(inner) = inner {
        lines.extend(inner.lines().map(|line| format!("  {line}")));
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Nested HTML preview: outermost box first, each box wrapping the next
/// inner one.
#[must_use]
pub fn preview_html(stack: &BoxStack) -> String {
    if stack.is_empty() {
        return format!("<div class=\"preview-empty\">{PREVIEW_EMPTY}</div>");
    }
    stack
        .iter()
        .enumerate()
        .fold(None, |inner: Option<String>, (index, data)| {
            Some(preview_box(index, data, inner.as_deref()))
        })
        .unwrap_or_default()
}
