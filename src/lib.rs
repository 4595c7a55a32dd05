//! This crate exposes an ordered collection backed by an unbalanced
//! Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and owns up to two child `Node`s. The invariants that make it a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold an
//!    element greater than or equal to its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for an element takes `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). The tree in this crate does
//! nothing to keep its height down, so sorted input degrades it into a chain
//! of height `N`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! [`OrderedTree`] is the tree itself and [`OrderedCollection`] is the
//! interface callers can hold it through.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod collection;
pub mod error;
pub mod tree;

pub use collection::OrderedCollection;
pub use error::{EmptyCollection, ExtremumResult};
pub use tree::OrderedTree;
