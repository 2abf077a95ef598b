use ordered_tree::Order;
use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
    /// Walk the tree in the given order
    Traverse(Order),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => {
                let orders = [Order::InOrder, Order::PreOrder, Order::PostOrder];
                Op::Traverse(*g.choose(&orders).unwrap())
            }
            _ => unreachable!(),
        }
    }
}

/// Installs a test logger so `RUST_LOG=ordered_tree=trace` shows tree activity.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
