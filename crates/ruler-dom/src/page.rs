//! Click dispatch over a [`DomTree`].
//!
//! [§ 2.9 Dispatching events](https://dom.spec.whatwg.org/#dispatching-events)
//!
//! A [`Page`] owns the tree and the click listeners attached to its nodes.
//! Dispatch follows the bubble phase only: listeners on the target run
//! first, then those on each ancestor up to the Document, until one of them
//! calls [`MouseEvent::stop_propagation`].
//!
//! Listeners may register a teardown hook. The hook runs exactly once, when
//! the listener is removed, when its node is removed from the tree, or when
//! the page itself is dropped, whichever happens first.

use crate::{DomTree, NodeId};

/// Callback invoked for a click reaching the listener's node.
pub type ClickListener = Box<dyn FnMut(&mut DomTree, &mut MouseEvent)>;

/// Cleanup run when a listener is detached.
pub type Teardown = Box<dyn FnOnce(&mut DomTree)>;

/// Handle returned by [`Page::add_click_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// [UI Events § 3.4.2 MouseEvent](https://www.w3.org/TR/uievents/#interface-mouseevent)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    target: NodeId,
    current_target: NodeId,
    propagation_stopped: bool,
}

impl MouseEvent {
    /// A click aimed at `target`.
    #[must_use]
    pub const fn click(target: NodeId) -> Self {
        Self {
            target,
            current_target: target,
            propagation_stopped: false,
        }
    }

    /// "The target of an event is the object to which event is dispatched."
    #[must_use]
    pub const fn target(&self) -> NodeId {
        self.target
    }

    /// Node whose listener is currently running.
    #[must_use]
    pub const fn current_target(&self) -> NodeId {
        self.current_target
    }

    /// `event.stopPropagation()`: listeners on the current node still run,
    /// ancestors are skipped.
    pub const fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether a listener stopped propagation.
    #[must_use]
    pub const fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

struct Registration {
    id: ListenerId,
    node: NodeId,
    // Taken out while the listener runs so it can borrow the tree mutably.
    listener: Option<ClickListener>,
    teardown: Option<Teardown>,
}

/// A document plus its click listeners.
pub struct Page {
    tree: DomTree,
    registrations: Vec<Registration>,
    next_listener: u64,
}

impl Page {
    /// Wrap an existing tree.
    #[must_use]
    pub fn new(tree: DomTree) -> Self {
        Self {
            tree,
            registrations: Vec::new(),
            next_listener: 1,
        }
    }

    /// The underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutable access to the underlying tree.
    ///
    /// Structural removals should go through [`Page::remove_child`] so that
    /// listener teardown runs.
    pub const fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// `node.addEventListener("click", listener)`
    pub fn add_click_listener(&mut self, node: NodeId, listener: ClickListener) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.registrations.push(Registration {
            id,
            node,
            listener: Some(listener),
            teardown: None,
        });
        id
    }

    /// Attach a teardown hook to a registered listener, replacing any
    /// previous hook. Returns false for unknown listeners.
    pub fn set_teardown(&mut self, id: ListenerId, teardown: Teardown) -> bool {
        match self.registrations.iter_mut().find(|r| r.id == id) {
            Some(registration) => {
                registration.teardown = Some(teardown);
                true
            }
            None => false,
        }
    }

    /// `node.removeEventListener(...)`; runs the teardown hook.
    /// Returns false if the listener was already gone.
    pub fn remove_click_listener(&mut self, id: ListenerId) -> bool {
        let Some(index) = self.registrations.iter().position(|r| r.id == id) else {
            return false;
        };
        let registration = self.registrations.remove(index);
        if let Some(teardown) = registration.teardown {
            teardown(&mut self.tree);
        }
        true
    }

    /// Number of listeners attached to `node`.
    #[must_use]
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.registrations.iter().filter(|r| r.node == node).count()
    }

    /// Whether the listener is still attached.
    #[must_use]
    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.registrations.iter().any(|r| r.id == id)
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detach `child` from `parent` and tear down every listener attached
    /// anywhere in the removed subtree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.remove_child(parent, child);
        let removed = self.tree.inclusive_descendants(child);
        let doomed: Vec<ListenerId> = self
            .registrations
            .iter()
            .filter(|r| removed.contains(&r.node))
            .map(|r| r.id)
            .collect();
        for id in doomed {
            let _ = self.remove_click_listener(id);
        }
    }

    /// Dispatch a click at `target` and return the event after dispatch.
    ///
    /// [§ 2.9 Dispatching events](https://dom.spec.whatwg.org/#concept-event-dispatch)
    /// The propagation path is computed once, before any listener runs.
    pub fn click(&mut self, target: NodeId) -> MouseEvent {
        let mut event = MouseEvent::click(target);
        let path: Vec<NodeId> = std::iter::once(target)
            .chain(self.tree.ancestors(target))
            .collect();

        for node in path {
            event.current_target = node;
            let ids: Vec<ListenerId> = self
                .registrations
                .iter()
                .filter(|r| r.node == node)
                .map(|r| r.id)
                .collect();

            for id in ids {
                let Some(mut listener) = self
                    .registrations
                    .iter_mut()
                    .find(|r| r.id == id)
                    .and_then(|r| r.listener.take())
                else {
                    continue;
                };
                listener(&mut self.tree, &mut event);
                // The listener may have been removed from inside a callback.
                if let Some(registration) = self.registrations.iter_mut().find(|r| r.id == id) {
                    registration.listener = Some(listener);
                }
            }

            if event.propagation_stopped {
                break;
            }
        }

        event
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for registration in std::mem::take(&mut self.registrations) {
            if let Some(teardown) = registration.teardown {
                teardown(&mut self.tree);
            }
        }
    }
}
