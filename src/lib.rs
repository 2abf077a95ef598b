//! This crate exposes an ordered Binary Search Tree (BST) of unique values.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. [`OrderedTree`] does no rebalancing,
//! so its height depends on insertion order. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right
//! subtree (see [`traverse`]).
//!
//! "Less" and "greater" are decided by a comparator picked when the tree is
//! built. [`OrderedTree::new`] uses [`Ord`]; [`OrderedTree::with_comparator`]
//! takes anything implementing [`compare::Compare`], including closures.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for value in [30, 10, 50, 40, 60] {
//!     tree.insert(value);
//! }
//!
//! // 30 has two children, so its in-order successor 40 takes its place.
//! assert!(tree.remove(&30));
//! assert_eq!(
//!     tree.traverse(Order::PreOrder).copied().collect::<Vec<_>>(),
//!     [40, 10, 50, 60]
//! );
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 40, 50, 60]);
//! ```
//!
//! ## Logging
//!
//! Inserts and removals are reported at `trace` level through the [`log`]
//! facade. Nothing is printed unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
mod node;
pub mod traverse;
pub mod tree;

pub use error::EmptyTreeError;
pub use traverse::{Order, Traverse};
pub use tree::OrderedTree;
