//! Box positioning calculator.
//!
//! Turns a stack of nested boxes, each described by four hand-typed edge
//! measurements, into copy-ready HTML/CSS snippets.
//!
//! # Scope
//!
//! - Ordered box sequence with stable ids ([`stack`])
//! - Edge offsets between each box and its enclosing box ([`derive`])
//! - Snippets for absolute, flexbox, grid, and margin layouts ([`snippet`])
//! - Clipboard copy with a timed "Copied!" indicator ([`clipboard`])
//! - Details panel and nested preview ([`details`])
//! - The [`PositioningTool`] tying these together ([`tool`])

/// Clipboard capability and copy indicator.
pub mod clipboard;
/// Adjacent-box edge differences.
pub mod derive;
/// Details panel and preview rendering.
pub mod details;
/// Command-line box field parsing.
pub mod input;
/// Edge measurements.
pub mod measurement;
/// Snippet templates.
pub mod snippet;
/// The ordered box sequence.
pub mod stack;
/// Tool state and operations.
pub mod tool;

pub use clipboard::{
    COPIED_INDICATOR, Clipboard, ClipboardError, CopyFeedback, MemoryClipboard,
    Osc52Clipboard,
};
pub use derive::{Adjacency, EdgeDeltas, PositionSummary, derive_adjacency, position_summary};
pub use details::{BoxDetails, DetailsView};
pub use input::{BoxSpecError, parse_box_fields};
pub use measurement::{Edge, Measurements};
pub use snippet::{PLACEHOLDER, Strategy, generate_snippet, generate_snippets};
pub use stack::{BoxData, BoxId, BoxStack, Position};
pub use tool::PositioningTool;
