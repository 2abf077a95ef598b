//! The owned node structure backing an [`OrderedTree`][crate::OrderedTree].

/// An owning, possibly empty, child slot. Both the tree's root and every
/// `left`/`right` child are `Link`s, so removal only ever has to rewrite one.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and exclusively owns its two subtrees. There is no
/// parent pointer: anything that needs to reach "upward" walks down from the
/// root to the owning slot instead.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Consumes a node that is being removed from the tree and returns what should
    /// take its place in the parent's slot.
    ///
    /// Returns the node's value alongside the replacement subtree.
    pub(crate) fn unlink(mut self: Box<Self>) -> (T, Link<T>) {
        match (self.left.take(), self.right.take()) {
            (None, None) => {
                log::trace!("removing leaf");
                (self.value, None)
            }
            (Some(child), None) | (None, Some(child)) => {
                log::trace!("removing node with one child");
                (self.value, Some(child))
            }
            // With two children the in-order successor (the smallest value in the right
            // subtree) moves into this node. It's larger than everything on the left and
            // smaller than everything left behind on the right.
            (Some(left), Some(right)) => {
                log::trace!("removing node with two children");
                let (successor, right) = right.pop_min();
                let removed = std::mem::replace(&mut self.value, successor);
                self.left = Some(left);
                self.right = right;
                (removed, Some(self))
            }
        }
    }

    /// Detaches the smallest node of the subtree rooted at `self`. Returns its value
    /// and the remaining subtree.
    fn pop_min(self: Box<Self>) -> (T, Link<T>) {
        let mut subtree = Some(self);
        let mut slot = &mut subtree;
        while slot.as_ref().map_or(false, |n| n.left.is_some()) {
            match slot {
                Some(node) => slot = &mut node.left,
                None => break,
            }
        }

        match slot.take() {
            Some(min) => {
                let Node { value, right, .. } = *min;
                *slot = right;
                (value, subtree)
            }
            // `subtree` started out as `Some` and the walk only follows `Some` links.
            None => unreachable!("minimum of a non-empty subtree"),
        }
    }
}

/// Drops every node reachable from `link` without recursing, so list-shaped trees of
/// any depth can be freed.
pub(crate) fn drop_iteratively<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
