//! Element bounding boxes.

use serde::{Deserialize, Serialize};

/// [CSSOM View § 6.1 DOMRect](https://drafts.fxtf.org/geometry/#DOMRect)
///
/// Axis-aligned rectangle in CSS pixels, as returned by
/// `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal position of the top-left corner.
    #[serde(default)]
    pub x: f32,
    /// Vertical position of the top-left corner.
    #[serde(default)]
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Rectangle at `(x, y)` with the given size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    #[must_use]
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// `width / height`, or `None` when the ratio is not a finite number
    /// (zero height, or NaN dimensions).
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        let ratio = self.width / self.height;
        ratio.is_finite().then_some(ratio)
    }
}
