//! Ancestor traversal and square highlighting.
//!
//! Walks upward from a clicked element, collecting the "square-like"
//! containers that enclose it, and optionally outlines them.
//!
//! - [`traverse`]: the walk itself, generic over [`ruler_dom::ElementHost`]
//! - [`square`]: the default predicate
//! - [`highlight`]: inline-style highlighting with a staggered transition
//! - [`component`]: the click trigger that ties them to a [`ruler_dom::Page`]

/// Click trigger mounted on a container.
pub mod component;
/// Highlight styling.
pub mod highlight;
/// Square-like element detection.
pub mod square;
/// Upward ancestor walk.
pub mod traverse;

pub use component::{ElementTraversal, TraversalOptions, TraverseCallback};
pub use highlight::{DEFAULT_HIGHLIGHT_COLOR, Highlighter};
pub use square::is_square_like;
pub use traverse::{collect_ancestors, traverse_ancestors};
