//! The ordered box sequence.
//!
//! # Nesting order
//!
//! Boxes are kept in insertion order, and that order *is* the nesting:
//! index 0 is the innermost element, the last index is the outermost
//! container, and the box at index `i + 1` directly encloses the box at
//! index `i`. Appending always adds a new outermost box. Removal closes the
//! gap without reordering the survivors, so relative nesting between any two
//! remaining boxes never changes.

use std::fmt;

use serde::Serialize;

use ruler_css::parse_leading_integer;

use crate::measurement::{Edge, Measurements};

/// Identifier assigned when a box is added. Never reused until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoxId(pub u32);

impl BoxId {
    /// The first id handed out after construction or reset.
    pub const FIRST: Self = Self(1);
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pixel coordinates captured when the box is created.
///
/// `x` is the leading integer of `left`, `y` that of `top`; anything
/// unset or unparsable reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

impl Position {
    /// Capture the position for a set of measurements.
    #[must_use]
    pub fn of(measurements: &Measurements) -> Self {
        let px = |edge| {
            measurements
                .get(edge)
                .and_then(parse_leading_integer)
                .unwrap_or(0)
        };
        Self {
            x: px(Edge::Left),
            y: px(Edge::Top),
        }
    }
}

/// Preview classes, darkest border first. Boxes beyond the palette reuse the
/// last entry.
pub const TINTS: [&str; 4] = [
    "border-blue-600 bg-white/40",
    "border-blue-500 bg-white/60",
    "border-blue-400 bg-white/80",
    "border-blue-300 bg-white",
];

/// One user-defined box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxData {
    /// Stable identifier.
    pub id: BoxId,
    /// Edge measurements as entered.
    pub measurements: Measurements,
    /// Preview class list from [`TINTS`].
    pub tint: &'static str,
    /// Coordinates captured at creation.
    pub position: Position,
}

/// Boxes in nesting order (see the module docs).
#[derive(Debug, Clone)]
pub struct BoxStack {
    boxes: Vec<BoxData>,
    next_id: BoxId,
}

impl BoxStack {
    /// An empty stack whose first box will get [`BoxId::FIRST`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boxes: Vec::new(),
            next_id: BoxId::FIRST,
        }
    }

    /// Append a new outermost box and return its id.
    pub fn push(&mut self, measurements: Measurements) -> BoxId {
        let id = self.next_id;
        self.next_id = BoxId(id.0 + 1);
        let tint = TINTS[self.boxes.len().min(TINTS.len() - 1)];
        let position = Position::of(&measurements);
        self.boxes.push(BoxData {
            id,
            measurements,
            tint,
            position,
        });
        id
    }

    /// Remove the box with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: BoxId) -> bool {
        let before = self.boxes.len();
        self.boxes.retain(|b| b.id != id);
        self.boxes.len() != before
    }

    /// Drop every box and restart ids at [`BoxId::FIRST`].
    pub fn clear(&mut self) {
        self.boxes.clear();
        self.next_id = BoxId::FIRST;
    }

    /// Number of boxes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True when there are no boxes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Boxes innermost first.
    #[must_use]
    pub fn as_slice(&self) -> &[BoxData] {
        &self.boxes
    }

    /// Iterate innermost first.
    pub fn iter(&self) -> std::slice::Iter<'_, BoxData> {
        self.boxes.iter()
    }

    /// Look up a box by id.
    #[must_use]
    pub fn get(&self, id: BoxId) -> Option<&BoxData> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Nesting index of a box (0 = innermost).
    #[must_use]
    pub fn index_of(&self, id: BoxId) -> Option<usize> {
        self.boxes.iter().position(|b| b.id == id)
    }

    /// The box at index 0.
    #[must_use]
    pub fn innermost(&self) -> Option<&BoxData> {
        self.boxes.first()
    }

    /// The box at the last index.
    #[must_use]
    pub fn outermost(&self) -> Option<&BoxData> {
        self.boxes.last()
    }

    /// The id the next [`BoxStack::push`] will assign.
    #[must_use]
    pub const fn next_id(&self) -> BoxId {
        self.next_id
    }
}

impl Default for BoxStack {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BoxStack {
    type Item = &'a BoxData;
    type IntoIter = std::slice::Iter<'a, BoxData>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}
