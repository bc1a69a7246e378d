//! JSON document fixtures.
//!
//! A fixture describes an element subtree together with the geometry a
//! layout pass would have produced, so the traversal tools can run without a
//! browser:
//!
//! ```json
//! {
//!   "tag": "body",
//!   "rect": { "width": 800, "height": 600 },
//!   "children": [
//!     { "tag": "div", "attrs": { "class": "box", "id": "card" },
//!       "rect": { "width": 200, "height": 200 } }
//!   ]
//! }
//! ```
//!
//! A root tagged `html` becomes the document element; any other root is
//! wrapped in a synthesized `<html>` element.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DomTree, ElementData, NodeId, NodeType, Rect};

/// Error type for fixture loading.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Failed to read the fixture file.
    #[error("failed to read fixture '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The JSON did not describe a node tree.
    #[error("invalid fixture: {0}")]
    Json(#[from] serde_json::Error),
    /// A node had an empty tag name.
    #[error("fixture node has an empty tag name")]
    EmptyTag,
}

/// One element (or text run) in a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureNode {
    /// Element tag name. Ignored when `text` is set.
    #[serde(default)]
    pub tag: String,
    /// Attributes, including `id` and `class`.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Bounding box.
    #[serde(default)]
    pub rect: Rect,
    /// Text content; turns this entry into a text node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child nodes in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FixtureNode>,
}

/// Parse fixture JSON into a fresh tree.
///
/// # Errors
///
/// Returns [`FixtureError::Json`] for malformed JSON and
/// [`FixtureError::EmptyTag`] for element entries without a tag.
pub fn parse_fixture(json: &str) -> Result<DomTree, FixtureError> {
    let root: FixtureNode = serde_json::from_str(json)?;
    let mut tree = DomTree::new();

    if root.tag.eq_ignore_ascii_case("html") {
        build(&mut tree, NodeId::ROOT, &root)?;
    } else {
        let html = tree.append_element(NodeId::ROOT, ElementData::new("html"));
        build(&mut tree, html, &root)?;
    }
    Ok(tree)
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_fixture`].
pub fn load_fixture(path: &Path) -> Result<DomTree, FixtureError> {
    let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_fixture(&json)
}

fn build(tree: &mut DomTree, parent: NodeId, node: &FixtureNode) -> Result<(), FixtureError> {
    if let Some(text) = &node.text {
        let id = tree.alloc(NodeType::Text(text.clone()));
        tree.append_child(parent, id);
        return Ok(());
    }
    if node.tag.trim().is_empty() {
        return Err(FixtureError::EmptyTag);
    }

    let mut element = ElementData::new(node.tag.trim()).with_bounds(node.rect);
    for (name, value) in &node.attrs {
        element = element.with_attr(name, value);
    }
    let id = tree.append_element(parent, element);
    for child in &node.children {
        build(tree, id, child)?;
    }
    Ok(())
}
