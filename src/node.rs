//! The core recursive structure. Every [`Node`] is both an element of the
//! tree and the root of the subtree it heads, so the whole API lives here as
//! methods that recurse down the child links.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::{Rc, Weak};

use crate::{Init, Iter};

/// Shared ownership handle to a node's storage. Children are owned through
/// strong counts; the parent back-reference is always [`Weak`] so a subtree
/// never keeps its parent alive.
pub(crate) type Handle = Rc<RefCell<Inner>>;

/// A node's fields. `value` is `None` only for an empty placeholder: a tree
/// that never held a value, or a root whose last value was removed. A
/// valueless node never has children.
pub(crate) struct Inner {
    pub(crate) value: Option<i64>,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) parent: Weak<RefCell<Inner>>,
}

/// Manual implementation so the child handles are copied by reference. This
/// is the shallow snapshot [`Node::remove`] takes before clearing a node:
/// the clone and the original share children until one side is mutated.
impl Clone for Inner {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            left: self.left.as_ref().map(Rc::clone),
            right: self.right.as_ref().map(Rc::clone),
            parent: Weak::clone(&self.parent),
        }
    }
}

/// A node of an unbalanced integer Binary Search Tree.
///
/// `Node` is a cheap handle: [`Clone`] copies the handle, not the structure,
/// so two clones observe (and mutate) the same tree. All operations take
/// `&self` and mutate through interior mutability, which is what lets a node
/// restructure *itself* during deletion.
///
/// # Examples
///
/// ```
/// use bstree::Node;
///
/// let node = Node::new();
/// assert!(node.is_empty());
///
/// node.insert(3);
/// node.insert_many(&[1, 7]);
///
/// assert_eq!(node.value(), Some(3));
/// assert_eq!(node.left().unwrap().value(), Some(1));
/// assert_eq!(node.right().unwrap().value(), Some(7));
/// ```
pub struct Node(pub(crate) Handle);

/// The whole tree, which is nothing more than its root [`Node`]. The alias
/// exists because call sites read better when they name the structure they
/// own rather than its first element.
pub type Tree = Node;

impl Clone for Node {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: same values in the same shape. Parent references
/// are deliberately ignored so a detached subtree compares equal to an
/// identically-shaped root.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let (value, left, right) = self.parts();
        let (other_value, other_left, other_right) = other.parts();
        value == other_value && left == other_left && right == other_right
    }
}

impl Eq for Node {}

impl Node {
    /// Generates a new, empty node.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value: None,
            left: None,
            right: None,
            parent: Weak::new(),
        })))
    }

    /// Generates a node holding a single value and no children.
    pub fn with_value(n: i64) -> Self {
        let node = Self::new();
        node.0.borrow_mut().value = Some(n);
        node
    }

    /// Builds a tree from an [`Init`] (or anything convertible into one).
    /// A sequence is applied through [`Node::insert`] in order, so the first
    /// element lands at the root and later duplicates are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_init(vec![3, 1, 7]);
    /// assert_eq!(tree.value(), Some(3));
    /// assert_eq!(tree.left().unwrap().value(), Some(1));
    /// assert_eq!(tree.right().unwrap().value(), Some(7));
    /// ```
    pub fn with_init(init: impl Into<Init>) -> Self {
        let node = Self::new();
        match init.into() {
            Init::Empty => {}
            Init::Scalar(n) => node.0.borrow_mut().value = Some(n),
            Init::Sequence(ns) => node.insert_many(&ns),
        }
        node
    }

    /// The value stored at this node, or `None` for an empty placeholder.
    pub fn value(&self) -> Option<i64> {
        self.0.borrow().value
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<Node> {
        self.0.borrow().left.as_ref().map(|h| Node(Rc::clone(h)))
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<Node> {
        self.0.borrow().right.as_ref().map(|h| Node(Rc::clone(h)))
    }

    /// The node this one is a child of, or `None` for a root (or a node
    /// whose former parent has been dropped).
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// Whether two handles refer to the same node.
    pub fn ptr_eq(this: &Node, other: &Node) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Whether this node holds no value. An empty node has no children
    /// either; it is the empty tree (or a root drained by deletions).
    pub fn is_empty(&self) -> bool {
        self.value().is_none()
    }

    /// The number of values in the subtree rooted at this node.
    pub fn len(&self) -> usize {
        let (value, left, right) = self.parts();
        if value.is_none() {
            return 0;
        }
        1 + left.map_or(0, |l| l.len()) + right.map_or(0, |r| r.len())
    }

    /// The number of levels in the subtree rooted at this node. A node with
    /// no children has a height of 1; an empty node has a height of 0.
    pub fn height(&self) -> usize {
        let (value, left, right) = self.parts();
        if value.is_none() {
            return 0;
        }
        1 + left
            .map_or(0, |l| l.height())
            .max(right.map_or(0, |r| r.height()))
    }

    /// Inserts one value, preserving the ordering invariant. Inserting a
    /// value that is already present is a no-op. On an empty node the value
    /// is stored in place, which is how an empty root becomes the first
    /// element without a new allocation.
    ///
    /// Runs in `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Node;
    ///
    /// let node = Node::new();
    /// node.insert(2);
    /// node.insert(1);
    /// node.insert(2);
    ///
    /// assert_eq!(node.inorder(), vec![1, 2]);
    /// ```
    pub fn insert(&self, n: i64) {
        let v = match self.value() {
            None => {
                self.0.borrow_mut().value = Some(n);
                return;
            }
            Some(v) => v,
        };

        match n.cmp(&v) {
            Ordering::Equal => {}
            Ordering::Less => match self.left() {
                Some(left) => left.insert(n),
                None => self.set_left(Node::with_value(n)),
            },
            Ordering::Greater => match self.right() {
                Some(right) => right.insert(n),
                None => self.set_right(Node::with_value(n)),
            },
        }
    }

    /// Inserts every value in order. Equivalent to calling [`Node::insert`]
    /// once per element, so the slice order determines the tree shape.
    pub fn insert_many(&self, ns: &[i64]) {
        for &n in ns {
            self.insert(n);
        }
    }

    /// Whether the subtree rooted at this node holds the value. Runs in
    /// `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_init(vec![3, 1, 7]);
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(4));
    /// ```
    pub fn contains(&self, n: i64) -> bool {
        let v = match self.value() {
            None => return false,
            Some(v) => v,
        };

        match n.cmp(&v) {
            Ordering::Equal => true,
            Ordering::Less => self.left().map_or(false, |left| left.contains(n)),
            Ordering::Greater => self.right().map_or(false, |right| right.contains(n)),
        }
    }

    /// The smallest value in this subtree, found by walking the left spine.
    pub fn min(&self) -> Option<i64> {
        let mut node = self.clone();
        node.value()?;
        loop {
            match node.left() {
                Some(left) => node = left,
                None => return node.value(),
            }
        }
    }

    /// The largest value in this subtree, found by walking the right spine.
    pub fn max(&self) -> Option<i64> {
        let mut node = self.clone();
        node.value()?;
        loop {
            match node.right() {
                Some(right) => node = right,
                None => return node.value(),
            }
        }
    }

    /// Removes one value if present; a no-op otherwise.
    ///
    /// Deletion never rewires the deleted node's parent. When the target
    /// value is found, the node snapshots its fields, clears its own value
    /// in place, then detaches and re-grafts the snapshotted right child
    /// followed by the left child. Re-grafting into the now-valueless node
    /// absorbs the subtree root's value directly and re-appends that root's
    /// children, again right before left. The right-then-left order is a
    /// fixed tie-break that determines the shape of the tree after a
    /// deletion.
    ///
    /// A non-root leaf that loses its value this way is detached by its
    /// parent; only the root outlives its value, as an empty node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_init(vec![4, 2, 6]);
    /// tree.remove(4);
    ///
    /// // The right child was absorbed first, so 6 is the new root.
    /// assert_eq!(tree.value(), Some(6));
    /// assert_eq!(tree.left().unwrap().value(), Some(2));
    /// assert!(tree.right().is_none());
    /// ```
    pub fn remove(&self, n: i64) {
        if !self.contains(n) {
            return;
        }

        match self.value() {
            Some(v) if v == n => self.clear_and_absorb(),
            Some(v) => {
                let child = if n < v { self.left() } else { self.right() };
                // The child exists: `contains` just found the value below us.
                if let Some(child) = child {
                    child.remove(n);
                    if child.is_empty() {
                        self.detach(&child);
                    }
                }
            }
            None => {}
        }
    }

    /// Removes every value in order via [`Node::remove`].
    pub fn remove_many(&self, ns: &[i64]) {
        for &n in ns {
            self.remove(n);
        }
    }

    /// Whether the subtree rooted at this node is a full binary tree: every
    /// node has exactly zero or two children. An empty node has no value to
    /// anchor the check and counts as not full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// assert!(Tree::with_init(vec![5, 2, 1, 3, 8, 6, 9]).is_full_binary());
    ///
    /// // 4 has a single child, which spoils the whole structure.
    /// assert!(!Tree::with_init(vec![7, 4, 2, 8]).is_full_binary());
    /// ```
    pub fn is_full_binary(&self) -> bool {
        let (value, left, right) = self.parts();
        if value.is_none() {
            return false;
        }
        match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => left.is_full_binary() && right.is_full_binary(),
            _ => false,
        }
    }

    /// The values of this subtree in ascending order (left, self, right).
    /// An empty node contributes an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_init(vec![3, 6, 9, 2, 12]);
    /// assert_eq!(tree.inorder(), vec![2, 3, 6, 9, 12]);
    /// ```
    pub fn inorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.walk_inorder(&mut out);
        out
    }

    /// The values of this subtree root-first (self, left, right).
    pub fn preorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.walk_preorder(&mut out);
        out
    }

    /// The values of this subtree root-last (left, right, self).
    pub fn postorder(&self) -> Vec<i64> {
        let mut out = Vec::new();
        self.walk_postorder(&mut out);
        out
    }

    /// Lazily iterates the subtree in ascending order without materializing
    /// a `Vec`. The successor of each node is discovered by following child
    /// and parent links, which is what the parent back-reference is for.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_init(vec![3, 1, 7]);
    /// assert_eq!(tree.iter().take(2).collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn iter(&self) -> Iter {
        Iter::new(self)
    }

    /// Snapshot of the value and child handles, used to keep `RefCell`
    /// borrows short in the recursive operations.
    fn parts(&self) -> (Option<i64>, Option<Node>, Option<Node>) {
        let inner = self.0.borrow();
        (
            inner.value,
            inner.left.as_ref().map(|h| Node(Rc::clone(h))),
            inner.right.as_ref().map(|h| Node(Rc::clone(h))),
        )
    }

    fn walk_inorder(&self, out: &mut Vec<i64>) {
        let (value, left, right) = self.parts();
        let v = match value {
            None => return,
            Some(v) => v,
        };
        if let Some(left) = left {
            left.walk_inorder(out);
        }
        out.push(v);
        if let Some(right) = right {
            right.walk_inorder(out);
        }
    }

    fn walk_preorder(&self, out: &mut Vec<i64>) {
        let (value, left, right) = self.parts();
        let v = match value {
            None => return,
            Some(v) => v,
        };
        out.push(v);
        if let Some(left) = left {
            left.walk_preorder(out);
        }
        if let Some(right) = right {
            right.walk_preorder(out);
        }
    }

    fn walk_postorder(&self, out: &mut Vec<i64>) {
        let (value, left, right) = self.parts();
        let v = match value {
            None => return,
            Some(v) => v,
        };
        if let Some(left) = left {
            left.walk_postorder(out);
        }
        if let Some(right) = right {
            right.walk_postorder(out);
        }
        out.push(v);
    }

    /// Attaches `child` as the left child, wiring its parent reference.
    fn set_left(&self, child: Node) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().left = Some(child.0);
    }

    /// Attaches `child` as the right child, wiring its parent reference.
    fn set_right(&self, child: Node) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().right = Some(child.0);
    }

    /// Drops the child link to `child` if it is one of ours. The detached
    /// node's parent reference is left stale; it is either re-grafted
    /// immediately (which rewires it) or dropped.
    fn detach(&self, child: &Node) {
        let mut inner = self.0.borrow_mut();
        if inner.left.as_ref().map_or(false, |l| Rc::ptr_eq(l, &child.0)) {
            inner.left = None;
        } else if inner
            .right
            .as_ref()
            .map_or(false, |r| Rc::ptr_eq(r, &child.0))
        {
            inner.right = None;
        }
    }

    /// The deletion step for a matched value: clear the value in place,
    /// then re-insert the former children as whole subtrees, right first.
    ///
    /// The left child stays attached while the right child is grafted, so
    /// nodes from the right subtree may descend into the old left subtree
    /// before it is itself detached and re-grafted. That interleaving is
    /// part of the fixed deletion shape.
    fn clear_and_absorb(&self) {
        let snapshot = self.0.borrow().clone();
        self.0.borrow_mut().value = None;

        if snapshot.left.is_none() && snapshot.right.is_none() {
            return;
        }
        if let Some(right) = snapshot.right {
            let right = Node(right);
            self.detach(&right);
            self.graft(right);
        }
        if let Some(left) = snapshot.left {
            let left = Node(left);
            self.detach(&left);
            self.graft(left);
        }
    }

    /// Inserts a whole pre-built subtree, exactly like scalar insertion but
    /// carrying the subtree along instead of a single value. A valueless
    /// target absorbs the subtree root outright: it takes over the root's
    /// value and re-appends the root's children, right before left.
    fn graft(&self, node: Node) {
        let v = match self.value() {
            None => {
                let snapshot = node.0.borrow().clone();
                self.0.borrow_mut().value = snapshot.value;
                if let Some(right) = snapshot.right {
                    self.graft(Node(right));
                }
                if let Some(left) = snapshot.left {
                    self.graft(Node(left));
                }
                return;
            }
            Some(v) => v,
        };

        let n = match node.value() {
            Some(n) => n,
            // An empty subtree carries nothing to graft.
            None => return,
        };

        match n.cmp(&v) {
            Ordering::Less => match self.left() {
                Some(left) => left.graft(node),
                None => self.set_left(node),
            },
            Ordering::Greater => match self.right() {
                Some(right) => right.graft(node),
                None => self.set_right(node),
            },
            // The value is already in the tree; the duplicate is dropped.
            Ordering::Equal => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the tree checking the child/parent wiring and the ordering
    /// invariant at every node.
    fn assert_consistent(node: &Node) {
        let (value, left, right) = node.parts();
        if value.is_none() {
            assert!(left.is_none() && right.is_none());
            return;
        }
        if let Some(left) = left {
            assert!(left.value() < value);
            assert!(Node::ptr_eq(&left.parent().unwrap(), node));
            assert_consistent(&left);
        }
        if let Some(right) = right {
            assert!(right.value() > value);
            assert!(Node::ptr_eq(&right.parent().unwrap(), node));
            assert_consistent(&right);
        }
    }

    #[test]
    fn test_insert_wires_parents() {
        let tree = Tree::with_init(vec![3, 6, 9, 2, 12]);
        assert_consistent(&tree);
        assert!(tree.parent().is_none());
        assert_eq!(tree.right().unwrap().parent().unwrap().value(), Some(3));
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let tree = Tree::with_init(vec![5, 2, 8]);
        let before = Tree::with_init(vec![5, 2, 8]);
        tree.insert(2);
        tree.insert(5);
        assert_eq!(tree, before);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_remove_leaf_detaches_it() {
        let tree = Tree::with_init(vec![2, 1, 3]);
        tree.remove(1);

        assert!(tree.left().is_none());
        assert_eq!(tree.value(), Some(2));
        assert_eq!(tree.right().unwrap().value(), Some(3));
        assert_consistent(&tree);
    }

    #[test]
    fn test_remove_root_absorbs_right_before_left() {
        let tree = Tree::with_init(vec![4, 2, 6]);
        tree.remove(4);

        assert_eq!(tree.value(), Some(6));
        assert_eq!(tree.left().unwrap().value(), Some(2));
        assert!(tree.right().is_none());
        assert_consistent(&tree);
    }

    #[test]
    fn test_remove_interleaves_right_subtree_into_attached_left() {
        // While 8's children are re-appended the old left subtree is still
        // attached, so 7 must end up below 5 rather than as the new left
        // child of the root.
        let tree = Tree::with_init(vec![6, 8, 9, 2, 5, 3, 7, 4, 1]);
        tree.remove(6);

        assert_eq!(tree.value(), Some(8));
        assert_eq!(tree.left().unwrap().value(), Some(2));
        assert_eq!(tree.right().unwrap().value(), Some(9));
        let five = tree.left().unwrap().right().unwrap();
        assert_eq!(five.value(), Some(5));
        assert_eq!(five.right().unwrap().value(), Some(7));
        assert_consistent(&tree);
    }

    #[test]
    fn test_remove_last_value_empties_the_root_in_place() {
        let tree = Tree::with_value(5);
        tree.remove(5);

        assert!(tree.is_empty());
        assert!(tree.left().is_none());
        assert!(tree.right().is_none());

        // The emptied root is reusable.
        tree.insert(9);
        assert_eq!(tree.value(), Some(9));
    }

    #[test]
    fn test_remove_absent_value_is_noop() {
        let tree = Tree::with_init(vec![4, 2, 6]);
        let before = Tree::with_init(vec![4, 2, 6]);
        tree.remove(5);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_len_height_min_max() {
        let tree = Tree::new();
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);

        tree.insert_many(&[5, 3, 7, 4, 2, 9, 12, 1]);
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.height(), 4);
        assert_eq!(tree.min(), Some(1));
        assert_eq!(tree.max(), Some(12));
    }

    #[test]
    fn test_traversal_orders() {
        let tree = Tree::with_init(vec![5, 2, 1, 3, 8, 6, 9]);
        assert_eq!(tree.inorder(), vec![1, 2, 3, 5, 6, 8, 9]);
        assert_eq!(tree.preorder(), vec![5, 2, 1, 3, 8, 6, 9]);
        assert_eq!(tree.postorder(), vec![1, 3, 2, 6, 9, 8, 5]);
    }

    #[test]
    fn test_structural_equality_ignores_parents() {
        let tree = Tree::with_init(vec![5, 2, 8]);
        let subtree = tree.left().unwrap();
        assert_eq!(subtree, Node::with_value(2));
        assert_ne!(tree, Node::with_value(5));
    }
}
