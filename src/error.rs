//! Errors returned by tree operations.
//!
//! Only lookups that need a value to exist can fail. Rejected inserts and
//! removals of missing values are reported through `bool` returns instead.

/// Returned by [`OrderedTree::minimum`][crate::OrderedTree::minimum] and
/// [`OrderedTree::maximum`][crate::OrderedTree::maximum] when the tree holds no values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;
