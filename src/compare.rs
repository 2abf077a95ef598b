//! Comparators used to order the values stored in an [`OrderedTree`][crate::OrderedTree].
//!
//! A tree never calls `Ord::cmp` directly. Every comparison goes through the
//! tree's [`Compare`] implementation, which is fixed when the tree is built.
//! Plain closures work out of the box:
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! // Order strings by length, then alphabetically.
//! let mut tree = OrderedTree::with_comparator(|a: &&str, b: &&str| {
//!     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
//! });
//! tree.insert("pear");
//! tree.insert("fig");
//! tree.insert("banana");
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["fig", "pear", "banana"]);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)` are
/// opposites, and the order is transitive. An inconsistent comparator can't
/// cause memory unsafety but lookups will give meaningless answers.
pub trait Compare<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural order of `T` given by its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator.
///
/// ```
/// use ordered_tree::compare::{Natural, Reversed};
/// use ordered_tree::OrderedTree;
///
/// let mut tree = OrderedTree::with_comparator(Reversed(Natural));
/// tree.extend([1, 3, 2]);
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T, C> Compare<T> for Reversed<C>
where
    T: ?Sized,
    C: Compare<T>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
