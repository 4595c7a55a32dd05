//! Errors surfaced by ordered collections.

use thiserror::Error;

/// Returned by [`minimum`][crate::OrderedCollection::minimum] and
/// [`maximum`][crate::OrderedCollection::maximum] when the collection holds no elements. It is
/// the only failure any operation on an [`OrderedTree`][crate::OrderedTree] can report.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("ordered tree is empty")]
pub struct EmptyCollection;

/// Result alias for queries that need at least one element.
pub type ExtremumResult<'a, T> = Result<&'a T, EmptyCollection>;
