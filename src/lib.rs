//! This crate exposes an unbalanced Binary Search Tree (BST) ordered by a
//! comparator chosen when the tree is built.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of this
//! BST are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value that
//!    compares less than its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value that
//!    compares greater than or equal to its own value. Equal values are
//!    always routed right, so duplicates are allowed.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). This tree never
//! rebalances, so inserting values in sorted order produces a tree whose
//! height equals its size. Every walk through the tree is therefore written
//! as a loop over an explicit stack rather than as recursion.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.add(x);
//! }
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8, 7, 9]);
//! assert_eq!(tree.post_order().copied().collect::<Vec<_>>(), [1, 4, 3, 7, 9, 8, 5]);
//!
//! assert!(tree.remove(&3));
//! assert!(!tree.remove(&3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
mod tree;


pub use error::{Error, Result};
pub use tree::{NaturalOrder, OrderedTree};
