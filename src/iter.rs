//! Lazy in-order iteration.
//!
//! Rather than flattening the subtree into a `Vec` up front (what
//! [`Node::inorder`] does), [`Iter`] keeps a handle to the current node and
//! finds each successor on demand: the leftmost node of the right subtree
//! when there is one, otherwise the first ancestor reached from a left
//! child. The upward half of that walk is the reason nodes carry a parent
//! back-reference at all.

use crate::Node;

/// An iterator over the values of a subtree in ascending order.
///
/// Created by [`Node::iter`]. The walk is bounded to the subtree it was
/// started on; it never follows parent links above that node.
///
/// The iterator holds plain node handles and borrows the tree only for the
/// duration of each [`next`][Iterator::next] call, so the tree may be read
/// freely between calls. Mutating the tree mid-iteration is not useful: the
/// iterator keeps whatever nodes it has already reached alive, but the
/// values it yields from then on are unspecified.
pub struct Iter {
    root: Node,
    next: Option<Node>,
}

impl Iter {
    pub(crate) fn new(root: &Node) -> Self {
        let next = if root.is_empty() {
            None
        } else {
            Some(leftmost(root))
        };
        Self {
            root: root.clone(),
            next,
        }
    }

    /// The in-order successor of `node` within the iteration bounds.
    fn successor(&self, node: &Node) -> Option<Node> {
        if let Some(right) = node.right() {
            return Some(leftmost(&right));
        }

        // No right subtree: climb until we arrive from a left child. Hitting
        // the iteration root from below means the subtree is exhausted.
        let mut child = node.clone();
        while !Node::ptr_eq(&child, &self.root) {
            let parent = child.parent()?;
            let from_left = parent
                .left()
                .map_or(false, |left| Node::ptr_eq(&left, &child));
            if from_left {
                return Some(parent);
            }
            child = parent;
        }
        None
    }
}

impl Iterator for Iter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next.take()?;
        self.next = self.successor(&current);
        current.value()
    }
}

fn leftmost(node: &Node) -> Node {
    let mut node = node.clone();
    while let Some(left) = node.left() {
        node = left;
    }
    node
}
