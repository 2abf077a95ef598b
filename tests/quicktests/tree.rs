use ordered_tree::{EmptyTreeError, Order, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a `BTreeSet`, checking after every
/// step that both agree on what happened.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agreed = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Remove(x) => tree.remove(x) == set.remove(x),
            Op::Traverse(Order::InOrder) => tree.traverse(Order::InOrder).eq(set.iter()),
            Op::Traverse(order) => {
                let mut visited: Vec<_> = tree.traverse(*order).collect();
                visited.sort();
                visited.into_iter().eq(set.iter())
            }
        };
        if !agreed || tree.size() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|x| tree.search(x))
        && tree.minimum().ok() == set.iter().next()
        && tree.maximum().ok() == set.iter().next_back()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>, removes: Vec<i16>) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    for x in &removes {
        tree.remove(x);
    }

    let values: Vec<_> = tree.iter().collect();
    values.windows(2).all(|w| w[0] < w[1]) && values.len() == tree.size()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn duplicate_insert_counts_once(xs: Vec<u8>, x: u8) -> bool {
    let mut tree: OrderedTree<_> = xs.into_iter().collect();
    let before = tree.size();
    let first = tree.insert(x);
    let second = tree.insert(x);

    !second && tree.size() == before + usize::from(first)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.search(x))
        && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let mut pre: Vec<_> = tree.pre_order().collect();
    let mut post: Vec<_> = tree.post_order().collect();
    pre.sort();
    post.sort();

    let sorted: Vec<_> = tree.in_order().collect();
    pre == sorted && post == sorted && tree.traverse(Order::PostOrder).len() == tree.size()
}

#[quickcheck]
fn pre_order_rebuilds_same_shape(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let rebuilt: OrderedTree<_> = tree.pre_order().copied().collect();

    tree.pre_order().eq(rebuilt.pre_order()) && tree.height() == rebuilt.height()
}

#[test]
fn scenario_root_and_right_child() {
    init_logging();
    let mut tree = OrderedTree::new();
    assert!(tree.insert(30));
    assert!(tree.insert(50));
    assert!(tree.search(&50));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [30, 50]);

    assert!(tree.remove(&30));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [50]);
    assert_eq!(tree.minimum(), Ok(&50));
    assert_eq!(tree.maximum(), Ok(&50));
}

#[test]
fn scenario_empty_tree() {
    let tree = OrderedTree::<i32>::default();
    assert_eq!(tree.minimum(), Err(EmptyTreeError));
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
}

#[test]
fn scenario_two_child_deletion() {
    init_logging();
    let mut tree: OrderedTree<_> = [30, 10, 50, 40, 60].into_iter().collect();
    assert!(tree.remove(&30));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 40, 50, 60]);
    assert_eq!(tree.pre_order().next(), Some(&40));
}
