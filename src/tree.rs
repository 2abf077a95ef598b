//! An unbalanced Binary Search Tree storing unique values.
//!
//! Values are kept in the order given by the tree's comparator (see
//! [`compare`][crate::compare]). Inserting a value that compares equal to one
//! already stored leaves the tree untouched.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{EmptyTreeError, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&30));
//! assert_eq!(tree.minimum(), Err(EmptyTreeError));
//!
//! assert!(tree.insert(30));
//! assert!(tree.insert(50));
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(50));
//! assert_eq!(tree.size(), 2);
//!
//! assert!(tree.remove(&30));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&50]);
//! assert_eq!(tree.minimum(), Ok(&50));
//! assert_eq!(tree.maximum(), Ok(&50));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::compare::{Compare, Natural};
use crate::error::EmptyTreeError;
use crate::node::{self, Link, Node};
use crate::traverse::{InOrder, Order, PostOrder, PreOrder, Traverse};

/// A Binary Search Tree of unique values ordered by the comparator `C`.
///
/// No rebalancing is done, so the cost of every operation is proportional to the
/// tree's height: `O(lg N)` for random insertion orders and `O(N)` when values
/// arrive already sorted.
pub struct OrderedTree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    compare: C,
}

impl<T: Ord> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree` using the natural order of `T`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for OrderedTree<T, C> {
    fn drop(&mut self) {
        node::drop_iteratively(&mut self.root);
    }
}

impl<T, C> OrderedTree<T, C>
where
    C: Compare<T>,
{
    /// Generates a new, empty `OrderedTree` ordered by `compare`. The comparator
    /// is used for every insert, lookup and removal for the life of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.extend([1, 2, 3]);
    ///
    /// assert_eq!(tree.minimum(), Ok(&3));
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            len: 0,
            compare,
        }
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree unchanged,
    /// if an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let slot = self.slot_mut(&value);
        if slot.is_some() {
            log::trace!("insert rejected duplicate");
            return false;
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        log::trace!("inserted value, size is now {}", self.len);
        true
    }

    /// Returns whether a value equal to `value` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(30);
    /// tree.insert(50);
    ///
    /// assert!(tree.search(&50));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Same as [`search`][Self::search].
    pub fn contains(&self, value: &T) -> bool {
        self.search(value)
    }

    /// Potentially finds the stored value equal to `value`. Useful when the
    /// comparator only looks at part of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::with_comparator(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    /// tree.insert((7, "seven"));
    ///
    /// assert_eq!(tree.get(&(7, "")), Some(&(7, "seven")));
    /// assert_eq!(tree.get(&(8, "")), None);
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match self.compare.compare(value, &node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// Removes the value equal to `value` from the tree. Returns `false` if there
    /// was no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [30, 10, 50, 40, 60].into_iter().collect();
    ///
    /// assert!(tree.remove(&30));
    /// assert!(!tree.remove(&30));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 40, 50, 60]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes the value equal to `value` from the tree and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert_eq!(tree.take(&String::from("a")), Some(String::from("a")));
    /// assert_eq!(tree.take(&String::from("a")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let slot = self.slot_mut(value);
        let Some(node) = slot.take() else {
            log::trace!("remove found nothing");
            return None;
        };

        let (removed, replacement) = node.unlink();
        *slot = replacement;
        self.len -= 1;
        log::trace!("removed value, size is now {}", self.len);
        Some(removed)
    }

    /// Walks from the root to the slot holding the value equal to `value`, or to the
    /// empty slot where it would be attached.
    fn slot_mut(&mut self, value: &T) -> &mut Link<T> {
        let compare = &self.compare;
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => compare.compare(value, &node.value),
                None => return slot,
            };
            // Only take the mutable borrow of the child once we know we're descending.
            slot = match (ordering, slot) {
                (Ordering::Equal, slot) => return slot,
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, slot) => return slot,
            };
        }
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Returns the number of values in the tree.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as [`size`][Self::size].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The comparator this tree was built with.
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        log::debug!("clearing tree of {} values", self.len);
        node::drop_iteratively(&mut self.root);
        self.len = 0;
    }

    /// Returns the smallest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.minimum(), Err(EmptyTreeError));
    ///
    /// tree.extend([5, 2, 9]);
    /// assert_eq!(tree.minimum(), Ok(&2));
    /// ```
    pub fn minimum(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyTreeError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.maximum(), Err(EmptyTreeError));
    ///
    /// tree.extend([5, 2, 9]);
    /// assert_eq!(tree.maximum(), Ok(&9));
    /// ```
    pub fn maximum(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Gets the height of this tree: the number of nodes on the longest path from
    /// the root to a leaf. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Starts a lazy traversal of the tree in the given `order`.
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(&self.root, self.len, order)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> InOrder<'_, T> {
        self.in_order()
    }

    /// Visits the left subtree, then the node, then the right subtree.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root, self.len)
    }

    /// Visits the node, then the left subtree, then the right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root, self.len)
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root, self.len)
    }
}

impl<T, C> fmt::Debug for OrderedTree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> Extend<T> for OrderedTree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
