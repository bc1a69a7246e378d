//! Click-triggered traversal mounted on a container.
//!
//! [`ElementTraversal::mount`] attaches one click listener to a container
//! node. A click whose target matches the configured selector stops
//! propagating, collects the square-like ancestors of the target plus the
//! traversal root, optionally highlights them, and hands them to
//! [`TraversalOptions::on_traverse`].
//!
//! The listener's teardown hook reverts outstanding highlights. It runs on
//! [`ElementTraversal::unmount`], when the container is removed through
//! [`Page::remove_child`], or when the page is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use ruler_common::warning::warn_once;
use ruler_css::{SelectorList, parse_selector_list};
use ruler_dom::{DomTree, ListenerId, MouseEvent, NodeId, Page};

use crate::highlight::{DEFAULT_HIGHLIGHT_COLOR, Highlighter};
use crate::square::is_square_like;
use crate::traverse::collect_ancestors;

/// Receives the collected elements and the originating event.
pub type TraverseCallback = Box<dyn FnMut(&[NodeId], &MouseEvent)>;

/// Mount-time configuration.
pub struct TraversalOptions {
    /// Selector the click target must match; `*` matches everything.
    pub target_selector: String,
    /// Outline and background colour.
    pub highlight_color: String,
    /// Highlight results on every click.
    pub auto_highlight: bool,
    /// Called after each engaged click.
    pub on_traverse: Option<TraverseCallback>,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            target_selector: "*".to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            auto_highlight: false,
            on_traverse: None,
        }
    }
}

/// Which click targets engage the traversal.
enum TargetFilter {
    Any,
    Matching(SelectorList),
    Nothing,
}

impl TargetFilter {
    fn new(raw: &str) -> Self {
        if raw.trim() == "*" {
            return Self::Any;
        }
        match parse_selector_list(raw) {
            Some(list) if list.is_universal() => Self::Any,
            Some(list) => Self::Matching(list),
            None => {
                warn_once(
                    "Traversal",
                    &format!("target selector '{raw}' can never match; clicks are ignored"),
                );
                Self::Nothing
            }
        }
    }

    fn accepts(&self, tree: &DomTree, target: NodeId) -> bool {
        match self {
            Self::Any => true,
            Self::Matching(list) => list.matches(tree, target),
            Self::Nothing => false,
        }
    }
}

/// A mounted traversal trigger.
#[derive(Debug)]
pub struct ElementTraversal {
    listener: ListenerId,
    highlighter: Rc<RefCell<Highlighter>>,
}

impl ElementTraversal {
    /// Attach the trigger to `container`.
    pub fn mount(page: &mut Page, container: NodeId, options: TraversalOptions) -> Self {
        let TraversalOptions {
            target_selector,
            highlight_color,
            auto_highlight,
            mut on_traverse,
        } = options;

        let filter = TargetFilter::new(&target_selector);
        let highlighter = Rc::new(RefCell::new(Highlighter::new(&highlight_color)));

        let handler_highlighter = Rc::clone(&highlighter);
        let listener = page.add_click_listener(
            container,
            Box::new(move |tree: &mut DomTree, event: &mut MouseEvent| {
                if !filter.accepts(tree, event.target()) {
                    return;
                }
                event.stop_propagation();

                let elements =
                    collect_ancestors(&*tree, Some(event.target()), is_square_like::<DomTree>);
                if auto_highlight {
                    handler_highlighter.borrow_mut().highlight(tree, &elements);
                }
                if let Some(callback) = on_traverse.as_mut() {
                    callback(&elements, &*event);
                }
            }),
        );

        let teardown_highlighter = Rc::clone(&highlighter);
        let _ = page.set_teardown(
            listener,
            Box::new(move |tree: &mut DomTree| teardown_highlighter.borrow_mut().clear(tree)),
        );

        Self {
            listener,
            highlighter,
        }
    }

    /// The click listener's handle.
    #[must_use]
    pub const fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Elements currently highlighted by this trigger.
    #[must_use]
    pub fn highlighted(&self) -> Vec<NodeId> {
        self.highlighter.borrow().highlighted().to_vec()
    }

    /// Detach the listener and revert highlights. Returns false if the
    /// trigger had already been torn down.
    pub fn unmount(self, page: &mut Page) -> bool {
        page.remove_click_listener(self.listener)
    }
}
