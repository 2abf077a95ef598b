//! Lazy traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! Each traversal keeps an explicit stack of borrowed nodes (its size grows with the
//! height of the tree, not the number of values) instead of recursing, and yields values one at a time. A
//! traversal borrows the tree, so the tree can't be modified until it's dropped.
//! Calling a traversal method again starts a fresh walk over the current tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<_> = [30, 10, 50, 40, 60].into_iter().collect();
//!
//! let in_order: Vec<_> = tree.traverse(Order::InOrder).copied().collect();
//! let pre_order: Vec<_> = tree.traverse(Order::PreOrder).copied().collect();
//! let post_order: Vec<_> = tree.traverse(Order::PostOrder).copied().collect();
//!
//! assert_eq!(in_order, [10, 30, 40, 50, 60]);
//! assert_eq!(pre_order, [30, 10, 50, 40, 60]);
//! assert_eq!(post_order, [10, 40, 60, 50, 30]);
//! ```

use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// The order in which a traversal visits each node relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// Ascending traversal: left subtree, node, right subtree.
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being visited. The top of the stack is the next
    /// node to yield.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Node first, then its left subtree, then its right subtree.
pub struct PreOrder<'a, T> {
    /// Roots of subtrees still to visit, next one on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree comes out first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Both subtrees first, then the node.
pub struct PostOrder<'a, T> {
    /// Nodes paired with whether their children have already been scheduled.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// A traversal in an [`Order`] picked at runtime. Returned by
/// [`OrderedTree::traverse`][crate::OrderedTree::traverse].
pub enum Traverse<'a, T> {
    /// See [`InOrder`].
    InOrder(InOrder<'a, T>),
    /// See [`PreOrder`].
    PreOrder(PreOrder<'a, T>),
    /// See [`PostOrder`].
    PostOrder(PostOrder<'a, T>),
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize, order: Order) -> Self {
        match order {
            Order::InOrder => Self::InOrder(InOrder::new(root, len)),
            Order::PreOrder => Self::PreOrder(PreOrder::new(root, len)),
            Order::PostOrder => Self::PostOrder(PostOrder::new(root, len)),
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> Order {
        match self {
            Self::InOrder(_) => Order::InOrder,
            Self::PreOrder(_) => Order::PreOrder,
            Self::PostOrder(_) => Order::PostOrder,
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::InOrder(iter) => iter.next(),
            Self::PreOrder(iter) => iter.next(),
            Self::PostOrder(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::InOrder(iter) => iter.size_hint(),
            Self::PreOrder(iter) => iter.size_hint(),
            Self::PostOrder(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> ExactSizeIterator for Traverse<'_, T> {}

impl<T> FusedIterator for InOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for Traverse<'_, T> {}
