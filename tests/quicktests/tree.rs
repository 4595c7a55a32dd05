use ordered_tree::{EmptyCollection, OrderedCollection, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a collection and to a map of element counts.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same elements as the map says we should.
fn do_ops<T>(
    ops: &[Op<T>],
    collection: &mut dyn OrderedCollection<T>,
    counts: &mut BTreeMap<T, usize>,
)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                collection.insert(x.clone());
                *counts.entry(x.clone()).or_default() += 1;
            }
            Op::Remove(x) => {
                if collection.remove(x).is_some() {
                    match counts.get_mut(x) {
                        Some(1) => {
                            counts.remove(x);
                        }
                        Some(n) => *n -= 1,
                        None => panic!("removed something that was never inserted"),
                    }
                }
            }
        }
    }
}

fn new_collection<T: Ord + 'static>() -> Box<dyn OrderedCollection<T>> {
    Box::new(OrderedTree::new())
}

fn is_sorted<T: Ord>(xs: &[&T]) -> bool {
    xs.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut collection = new_collection::<i8>();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut *collection, &mut counts);

    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(x, n)| std::iter::repeat(*x).take(*n))
        .collect();
    let traversal = collection.traverse();

    is_sorted(&traversal)
        && collection.len() == expected.len()
        && traversal.into_iter().copied().eq(expected)
}

#[quickcheck]
fn traversal_is_sorted(xs: Vec<i8>) -> bool {
    let mut collection = new_collection::<i8>();
    for x in &xs {
        collection.insert(*x);
    }

    let traversal = collection.traverse();
    traversal.len() == xs.len() && is_sorted(&traversal)
}

#[quickcheck]
fn removing_absent_value_changes_nothing(xs: Vec<i8>, absent: i8) -> bool {
    let mut collection = new_collection::<i8>();
    for x in xs.iter().filter(|x| **x != absent) {
        collection.insert(*x);
    }
    let before: Vec<i8> = collection.traverse().into_iter().copied().collect();

    collection.remove(&absent).is_none()
        && collection.traverse().into_iter().copied().eq(before)
}

#[quickcheck]
fn removing_everything_empties(xs: Vec<i8>) -> bool {
    let mut collection = new_collection::<i8>();
    for x in &xs {
        collection.insert(*x);
    }
    for x in &xs {
        collection.remove(x);
    }

    collection.is_empty()
        && collection.traverse().is_empty()
        && collection.minimum() == Err(EmptyCollection)
        && collection.maximum() == Err(EmptyCollection)
}

#[quickcheck]
fn extremes_bound_everything(xs: Vec<i8>) -> bool {
    let mut collection = new_collection::<i8>();
    for x in &xs {
        collection.insert(*x);
    }

    match (collection.minimum(), collection.maximum()) {
        (Ok(min), Ok(max)) => xs.iter().all(|x| min <= x && x <= max),
        (Err(EmptyCollection), Err(EmptyCollection)) => xs.is_empty(),
        _ => false,
    }
}
