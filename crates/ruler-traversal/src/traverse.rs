//! Upward ancestor walk.
//!
//! The walk starts at the parent of the clicked node and follows parent
//! links. Every element strictly between the start and the traversal root
//! is offered to a predicate; matches are visited innermost first with a
//! zero-based index that counts matches only. The traversal root itself is
//! visited last, unconditionally: it stands for the page as a whole and is
//! treated as an implicit square.

use ruler_dom::ElementHost;

/// Walk from `start` towards the traversal root.
///
/// `start == None` is a no-op. `start` is never visited. If the walk runs
/// off the top of the tree without meeting the root (detached subtree, or a
/// start at or above the root), only the matches seen so far are visited.
pub fn traverse_ancestors<H, P, V>(host: &H, start: Option<H::Node>, mut predicate: P, mut visit: V)
where
    H: ElementHost + ?Sized,
    P: FnMut(&H, H::Node) -> bool,
    V: FnMut(H::Node, usize),
{
    let Some(start) = start else {
        return;
    };
    let root = host.traversal_root();
    let mut index = 0;
    let mut current = host.parent_of(start);

    while let Some(node) = current {
        if Some(node) == root {
            visit(node, index);
            return;
        }
        if predicate(host, node) {
            visit(node, index);
            index += 1;
        }
        current = host.parent_of(node);
    }
}

/// Collect the nodes [`traverse_ancestors`] would visit, in visit order.
#[must_use]
pub fn collect_ancestors<H, P>(host: &H, start: Option<H::Node>, predicate: P) -> Vec<H::Node>
where
    H: ElementHost + ?Sized,
    P: FnMut(&H, H::Node) -> bool,
{
    let mut out = Vec::new();
    traverse_ancestors(host, start, predicate, |node, _| out.push(node));
    out
}
