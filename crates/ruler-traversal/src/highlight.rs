//! Inline-style highlighting of traversal results.

use std::time::Duration;

use ruler_dom::{DomTree, NodeId};

/// Default outline and tint colour.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "rgba(0, 255, 0, 0.2)";

/// Transition applied to highlighted elements.
pub const HIGHLIGHT_TRANSITION: &str = "outline 0.3s ease, background-color 0.3s ease";

/// Extra transition delay per position in the highlighted sequence.
pub const STAGGER: Duration = Duration::from_millis(100);

/// Inline properties written by [`Highlighter::highlight`] and removed by
/// [`Highlighter::clear`].
pub const HIGHLIGHT_PROPERTIES: [&str; 4] =
    ["outline", "background-color", "transition", "transition-delay"];

/// `transition-delay` for the element at `index`.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    let millis = STAGGER.as_millis() * index as u128;
    format!("{millis}ms")
}

/// Tracks which elements currently carry highlight styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    color: String,
    highlighted: Vec<NodeId>,
}

impl Highlighter {
    /// A highlighter painting with `color`.
    #[must_use]
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
            highlighted: Vec::new(),
        }
    }

    /// Elements currently highlighted, in highlight order.
    #[must_use]
    pub fn highlighted(&self) -> &[NodeId] {
        &self.highlighted
    }

    /// Revert the previous highlight, then highlight `elements`.
    ///
    /// Afterwards the tracked set is exactly `elements`.
    pub fn highlight(&mut self, tree: &mut DomTree, elements: &[NodeId]) {
        self.clear(tree);

        let outline = format!("2px solid {}", self.color);
        for (index, &node) in elements.iter().enumerate() {
            let Some(element) = tree.as_element_mut(node) else {
                continue;
            };
            element.style.set("outline", &outline);
            element.style.set("background-color", &self.color);
            element.style.set("transition", HIGHLIGHT_TRANSITION);
            element.style.set("transition-delay", &stagger_delay(index));
            self.highlighted.push(node);
        }
    }

    /// Remove highlight styles from every tracked element.
    pub fn clear(&mut self, tree: &mut DomTree) {
        for node in self.highlighted.drain(..) {
            if let Some(element) = tree.as_element_mut(node) {
                for property in HIGHLIGHT_PROPERTIES {
                    let _ = element.style.remove(property);
                }
            }
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_COLOR)
    }
}
