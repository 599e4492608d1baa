//! An unbalanced Binary Search Tree (BST) of integers with parent
//! back-references.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a [`Node`]. Every `Node` here is
//! simultaneously an element and the root of the subtree it heads, so
//! operations recurse structurally down the child links (and, for sorted
//! iteration, back up the parent links). The most important invariants are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//! 3. Values are never duplicated: inserting a value that is already
//!    present is a no-op.
//!
//! This tree deliberately does *not* rebalance itself, so the height (and
//! therefore the cost of every operation) is `O(n)` on adversarial, sorted
//! input and `O(lg n)` on typical input.
//!
//! Deletion is unconventional: rather than rewiring the deleted node's
//! parent, the node clears its own value in place and re-grafts its former
//! children back into itself, right child first. This handles the zero-,
//! one-, and two-child cases uniformly and means the root of a tree is
//! never deallocated, merely emptied. See [`Node::remove`] for details.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let tree = Tree::with_init(vec![3, 1, 7]);
//!
//! assert!(tree.contains(7));
//! assert!(!tree.contains(4));
//! assert_eq!(tree.inorder(), vec![1, 3, 7]);
//!
//! tree.remove(3);
//! assert_eq!(tree.inorder(), vec![1, 7]);
//!
//! tree.remove_many(&[1, 7]);
//! assert!(tree.is_empty());
//! ```
//!
//! Dynamically-typed data (for example deserialized JSON) can be turned
//! into a tree through the fallible boundary:
//!
//! ```
//! use std::convert::TryFrom;
//!
//! use bstree::{Error, Node};
//! use serde_json::json;
//!
//! let tree = Node::try_from(&json!([3, 1, 7])).unwrap();
//! assert_eq!(tree.inorder(), vec![1, 3, 7]);
//!
//! assert!(matches!(
//!     Node::try_from(&json!("foo")),
//!     Err(Error::InvalidArgument(_))
//! ));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod init;
mod iter;
mod node;
mod render;

pub use error::Error;
pub use init::Init;
pub use iter::Iter;
pub use node::{Node, Tree};
