//! The capability interface for ordered collections.
//!
//! Callers that only need "put things in, take things out, look at them in order" can hold a
//! `Box<dyn OrderedCollection<T>>` and never name the concrete tree.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedCollection, OrderedTree};
//!
//! let mut collection: Box<dyn OrderedCollection<i32>> = Box::new(OrderedTree::new());
//! collection.insert(2);
//! collection.insert(1);
//!
//! assert_eq!(collection.traverse(), vec![&1, &2]);
//! assert_eq!(collection.maximum(), Ok(&2));
//! ```

use crate::error::ExtremumResult;

/// A collection that keeps its elements sorted.
///
/// This trait is object safe.
pub trait OrderedCollection<T> {
    /// Adds `value` to the collection. Always succeeds and duplicates are kept.
    fn insert(&mut self, value: T);

    /// Removes one element equal to `value` and hands it back. Returns `None` (and changes
    /// nothing) if no such element exists.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Calls `visit` on every element in ascending order.
    fn visit_in_order<'a>(&'a self, visit: &mut dyn FnMut(&'a T));

    /// The smallest element, or [`EmptyCollection`][crate::EmptyCollection] if there isn't one.
    fn minimum(&self) -> ExtremumResult<'_, T>;

    /// The largest element, or [`EmptyCollection`][crate::EmptyCollection] if there isn't one.
    fn maximum(&self) -> ExtremumResult<'_, T>;

    /// How many elements are stored.
    fn len(&self) -> usize;

    /// Whether there are no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every element in ascending order.
    fn traverse(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.len());
        self.visit_in_order(&mut |element| elements.push(element));
        elements
    }
}
