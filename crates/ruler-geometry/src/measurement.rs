//! Edge measurements as typed by the user.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Placeholder substituted for an unset edge when rendering CSS.
pub const UNSET_RENDER_VALUE: &str = "0";

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Distance from the top edge (the box's Y).
    Top,
    /// Distance from the right edge.
    Right,
    /// Distance from the bottom edge.
    Bottom,
    /// Distance from the left edge (the box's X).
    Left,
}

/// Four optional edge measurements, stored verbatim.
///
/// `None` means "unset", which is distinct from `"0"`: derivation reports
/// unset edges as not applicable, and only snippet rendering falls back to
/// [`UNSET_RENDER_VALUE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Measurements {
    /// Top edge.
    pub top: Option<String>,
    /// Right edge.
    pub right: Option<String>,
    /// Bottom edge.
    pub bottom: Option<String>,
    /// Left edge.
    pub left: Option<String>,
}

impl Measurements {
    /// Build from four raw fields; blank fields become unset.
    #[must_use]
    pub fn from_fields(top: &str, right: &str, bottom: &str, left: &str) -> Self {
        let mut m = Self::default();
        m.set(Edge::Top, top);
        m.set(Edge::Right, right);
        m.set(Edge::Bottom, bottom);
        m.set(Edge::Left, left);
        m
    }

    const fn slot(&self, edge: Edge) -> &Option<String> {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    const fn slot_mut(&mut self, edge: Edge) -> &mut Option<String> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// The stored value, or `None` when unset.
    #[must_use]
    pub fn get(&self, edge: Edge) -> Option<&str> {
        self.slot(edge).as_deref()
    }

    /// Store `value` verbatim. An empty string clears the edge.
    pub fn set(&mut self, edge: Edge, value: &str) {
        *self.slot_mut(edge) = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }

    /// The value to substitute into generated CSS.
    #[must_use]
    pub fn render(&self, edge: Edge) -> &str {
        self.get(edge).unwrap_or(UNSET_RENDER_VALUE)
    }

    /// True when every edge is unset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }

    /// `top right bottom left` for the `margin` shorthand.
    #[must_use]
    pub fn margin_shorthand(&self) -> String {
        format!(
            "{} {} {} {}",
            self.render(Edge::Top),
            self.render(Edge::Right),
            self.render(Edge::Bottom),
            self.render(Edge::Left)
        )
    }
}
