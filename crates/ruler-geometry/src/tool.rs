//! The positioning tool: box builder state and its operations.

use std::time::Instant;

use ruler_common::warning::warn_once;

use crate::clipboard::{Clipboard, CopyFeedback};
use crate::derive::{Adjacency, derive_adjacency};
use crate::details::{DetailsView, details_view, preview_html};
use crate::measurement::{Edge, Measurements};
use crate::snippet::{Strategy, generate_snippet, generate_snippets};
use crate::stack::{BoxData, BoxId, BoxStack};

/// One positioning tool instance.
///
/// Owns the box sequence, the draft being edited, the current selection,
/// and the copy indicator. Nothing here is shared between instances.
#[derive(Debug, Clone, Default)]
pub struct PositioningTool {
    boxes: BoxStack,
    draft: Measurements,
    selected: Option<BoxId>,
    copied: CopyFeedback,
}

impl PositioningTool {
    /// A tool with no boxes and an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The box sequence, innermost first.
    #[must_use]
    pub const fn boxes(&self) -> &BoxStack {
        &self.boxes
    }

    /// The measurements being edited.
    #[must_use]
    pub const fn draft(&self) -> &Measurements {
        &self.draft
    }

    /// Edit one field of the draft. Blank input clears the field.
    pub fn set_draft(&mut self, edge: Edge, value: &str) {
        self.draft.set(edge, value);
    }

    /// Whether "Add Box" is enabled: at least one draft field is filled.
    #[must_use]
    pub const fn can_add_box(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Commit the draft as the new outermost box, select it, and clear the
    /// draft. Returns `None` (and changes nothing) while the draft is empty.
    pub fn add_box(&mut self) -> Option<BoxId> {
        if !self.can_add_box() {
            return None;
        }
        let id = self.boxes.push(std::mem::take(&mut self.draft));
        self.selected = Some(id);
        Some(id)
    }

    /// Remove a box by id. Clears the selection if it pointed at that box.
    pub fn remove_box(&mut self, id: BoxId) -> bool {
        let removed = self.boxes.remove(id);
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Select an existing box. Unknown ids leave the selection unchanged.
    pub fn select_box(&mut self, id: BoxId) -> bool {
        let exists = self.boxes.get(id).is_some();
        if exists {
            self.selected = Some(id);
        }
        exists
    }

    /// Currently selected id.
    #[must_use]
    pub const fn selected_id(&self) -> Option<BoxId> {
        self.selected
    }

    /// Currently selected box.
    #[must_use]
    pub fn selected(&self) -> Option<&BoxData> {
        self.selected.and_then(|id| self.boxes.get(id))
    }

    /// Clear boxes, ids, selection, and draft.
    pub fn reset(&mut self) {
        self.boxes.clear();
        self.draft = Measurements::default();
        self.selected = None;
    }

    /// Edge differences between each box and the box enclosing it.
    #[must_use]
    pub fn adjacency(&self) -> Vec<Adjacency> {
        derive_adjacency(&self.boxes)
    }

    /// All four snippets, in [`Strategy`] order.
    #[must_use]
    pub fn snippets(&self) -> [String; 4] {
        generate_snippets(&self.boxes)
    }

    /// Snippet for one strategy.
    #[must_use]
    pub fn snippet(&self, strategy: Strategy) -> String {
        generate_snippet(&self.boxes, strategy)
    }

    /// Details panel for the current selection.
    #[must_use]
    pub fn details(&self) -> DetailsView {
        details_view(&self.boxes, self.selected)
    }

    /// Nested HTML preview.
    #[must_use]
    pub fn preview(&self) -> String {
        preview_html(&self.boxes)
    }

    /// Copy a snippet and show it as copied. A rejected write is only
    /// logged; the indicator is shown either way.
    pub fn copy_snippet(
        &mut self,
        strategy: Strategy,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) {
        if let Err(err) = clipboard.write_text(&self.snippet(strategy)) {
            warn_once("Clipboard", &err.to_string());
        }
        self.copied.mark(strategy, now);
    }

    /// Strategy currently shown as "Copied!".
    #[must_use]
    pub fn copied(&self, now: Instant) -> Option<Strategy> {
        self.copied.current(now)
    }

    /// Advance the clock: clears the copy indicator once it has expired.
    pub fn tick(&mut self, now: Instant) {
        let _ = self.copied.expire(now);
    }

    /// Whether a copy-indicator reset is still scheduled.
    #[must_use]
    pub const fn has_pending_reset(&self) -> bool {
        self.copied.is_pending()
    }

    /// Release everything scheduled by this instance. Call when the tool is
    /// being discarded.
    pub const fn teardown(&mut self) {
        self.copied.cancel();
    }
}
