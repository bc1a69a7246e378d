//! Offsets between adjacent boxes.
//!
//! For each box and the box directly enclosing it, every edge yields the
//! space between them:
//!
//! - `top`, `left`: child − parent (the child sits further from the origin)
//! - `right`, `bottom`: parent − child (the child is inset from the far edges)
//!
//! Measurements are parsed as CSS lengths and subtracted when both sides
//! carry the same unit. An edge that is unset on either side, unparsable, or
//! in mismatched units is *not applicable* (`None`), never zero.

use serde::Serialize;

use ruler_common::warning::warn_once;
use ruler_css::{Length, parse_leading_integer, parse_length};

use crate::measurement::{Edge, Measurements};
use crate::stack::{BoxData, BoxId, BoxStack};

/// Per-edge differences. `None` is "not applicable".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EdgeDeltas {
    /// Top difference (child − parent).
    pub top: Option<Length>,
    /// Right difference (parent − child).
    pub right: Option<Length>,
    /// Bottom difference (parent − child).
    pub bottom: Option<Length>,
    /// Left difference (child − parent).
    pub left: Option<Length>,
}

impl EdgeDeltas {
    /// The difference for one edge.
    #[must_use]
    pub const fn get(&self, edge: Edge) -> Option<Length> {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// The relationship between a box and the box enclosing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjacency {
    /// Nesting index of the child (0 = innermost).
    pub index: usize,
    /// The enclosed box.
    pub child: BoxId,
    /// The enclosing box, at `index + 1`.
    pub parent: BoxId,
    /// Edge differences.
    pub deltas: EdgeDeltas,
}

/// Difference for a single edge, following the sign rule in the module docs.
#[must_use]
pub fn edge_delta(edge: Edge, child: &Measurements, parent: &Measurements) -> Option<Length> {
    let child_raw = child.get(edge)?;
    let parent_raw = parent.get(edge)?;
    let (Some(c), Some(p)) = (parse_length(child_raw), parse_length(parent_raw)) else {
        warn_once(
            "Geometry",
            &format!("cannot compare {edge} values '{child_raw}' and '{parent_raw}'"),
        );
        return None;
    };

    let delta = match edge {
        Edge::Top | Edge::Left => c.checked_sub(p),
        Edge::Right | Edge::Bottom => p.checked_sub(c),
    };
    if delta.is_none() {
        warn_once(
            "Geometry",
            &format!("{edge} units differ: '{child_raw}' vs '{parent_raw}'"),
        );
    }
    delta
}

/// Deltas between `child` and its enclosing `parent`.
#[must_use]
pub fn deltas(child: &Measurements, parent: &Measurements) -> EdgeDeltas {
    EdgeDeltas {
        top: edge_delta(Edge::Top, child, parent),
        right: edge_delta(Edge::Right, child, parent),
        bottom: edge_delta(Edge::Bottom, child, parent),
        left: edge_delta(Edge::Left, child, parent),
    }
}

/// One record per box that has an enclosing box, innermost first.
/// The outermost box has no parent and so no record.
#[must_use]
pub fn derive_adjacency(stack: &BoxStack) -> Vec<Adjacency> {
    stack
        .as_slice()
        .windows(2)
        .enumerate()
        .map(|(index, pair)| Adjacency {
            index,
            child: pair[0].id,
            parent: pair[1].id,
            deltas: deltas(&pair[0].measurements, &pair[1].measurements),
        })
        .collect()
}

/// Integer pixel view of a box: position plus margins, each edge read with
/// `parseInt` semantics and unset or unparsable edges shown as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionSummary {
    /// Left as integer pixels.
    pub x: i64,
    /// Top as integer pixels.
    pub y: i64,
    /// Top margin.
    pub margin_top: i64,
    /// Right margin.
    pub margin_right: i64,
    /// Bottom margin.
    pub margin_bottom: i64,
    /// Left margin.
    pub margin_left: i64,
}

/// Summarize one box for display.
#[must_use]
pub fn position_summary(data: &BoxData) -> PositionSummary {
    let px = |edge| {
        data.measurements
            .get(edge)
            .and_then(parse_leading_integer)
            .unwrap_or(0)
    };
    PositionSummary {
        x: data.position.x,
        y: data.position.y,
        margin_top: px(Edge::Top),
        margin_right: px(Edge::Right),
        margin_bottom: px(Edge::Bottom),
        margin_left: px(Edge::Left),
    }
}
