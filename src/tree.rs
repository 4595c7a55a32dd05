//! An unbalanced BST built from exclusively owned nodes. Every node owns its two children through
//! an `Option<Box<_>>` slot, so removing a node is a matter of moving boxes between slots and
//! nothing is ever shared or reference counted.
//!
//! Every walk over the tree is a loop rather than a recursive call. Inserting sorted input
//! produces a chain as deep as the tree is long, and that must not overflow the stack.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{EmptyCollection, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.minimum(), Err(EmptyCollection));
//!
//! for value in [12, 4, 20, 1, 23] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.traverse(), vec![&1, &4, &12, &20, &23]);
//!
//! // Removing a node returns its element.
//! assert_eq!(tree.remove(&12), Some(12));
//! assert_eq!(tree.traverse(), vec![&1, &4, &20, &23]);
//!
//! // Removing something that isn't there does nothing.
//! assert_eq!(tree.remove(&12), None);
//! assert_eq!(tree.len(), 4);
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::collection::OrderedCollection;
use crate::error::{EmptyCollection, ExtremumResult};

/// An owning pointer to a subtree. `None` is an empty slot.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree that keeps elements in ascending order. Elements that compare equal to
/// an existing element are stored to its right, so duplicates are kept and come back out in the
/// order they went in.
///
/// The tree never rebalances, so its shape depends entirely on insertion order.
///
/// Removing a node with two children splices its predecessor into its place without reordering
/// anything, so in-order traversal always comes out sorted. With duplicates, that splice can hang
/// one copy of a value below the left side of another copy. Lookups are unaffected: every copy
/// stays reachable by descending left on less and right on greater.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.for_each(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many elements are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// depth of 0 and a tree built from sorted input has a depth equal to its length.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|n| (n, 1)));

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        deepest
    }

    /// Removes every element.
    ///
    /// Nodes are unlinked onto a work list before they're dropped so a long chain doesn't
    /// recurse through `Box`'s destructor.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The smallest element, found by following left children from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyCollection, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.minimum(), Err(EmptyCollection));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.minimum(), Ok(&1));
    /// ```
    pub fn minimum(&self) -> ExtremumResult<'_, T> {
        let mut node = self.root.as_deref().ok_or(EmptyCollection)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest element, found by following right children from the root. With duplicates
    /// this is the most recently inserted copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{EmptyCollection, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.maximum(), Err(EmptyCollection));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.maximum(), Ok(&3));
    /// ```
    pub fn maximum(&self) -> ExtremumResult<'_, T> {
        let mut node = self.root.as_deref().ok_or(EmptyCollection)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Calls `visit` on every element in ascending order. This walks the tree with an explicit
    /// stack: descend left pushing each node, then pop, visit, and step right.
    pub fn for_each<'a>(&'a self, mut visit: impl FnMut(&'a T)) {
        let mut stack: Vec<&'a Node<T>> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            visit(&node.value);
            current = node.right.as_deref();
        }
    }

    /// Every element in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8, 3].into_iter().collect();
    /// assert_eq!(tree.traverse(), vec![&3, &3, &5, &8]);
    /// ```
    pub fn traverse(&self) -> Vec<&T> {
        let mut elements = Vec::with_capacity(self.len);
        self.for_each(|value| elements.push(value));
        elements
    }
}

impl<T> OrderedTree<T>
where
    T: Ord,
{
    /// Inserts the given value. Anything that isn't strictly less than a node's element goes to
    /// its right, so inserting a value that's already present adds another copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.traverse(), vec![&1, &1]);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Whether some element compares equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = if *value < node.value {
                node.left.as_deref()
            } else if *value > node.value {
                node.right.as_deref()
            } else {
                return true;
            };
        }
        false
    }

    /// Removes the first node holding an element equal to `value` (the one nearest the root) and
    /// returns its element. If the tree does not contain such an element, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let slot = Self::slot_of(&mut self.root, value);
        let Some(mut target) = slot.take() else {
            debug!("value to remove is not in the tree");
            return None;
        };

        *slot = match (target.left.take(), target.right.take()) {
            (None, None) => {
                trace!("removing a leaf node");
                None
            }
            (None, Some(right)) => {
                trace!("removing a node with only a right child");
                Some(right)
            }
            (Some(left), None) => {
                trace!("removing a node with only a left child");
                Some(left)
            }
            (Some(left), Some(right)) => {
                trace!("removing a node with two children");
                Some(Self::splice_predecessor(left, right))
            }
        };

        self.len -= 1;
        Some(target.value)
    }

    /// Finds the slot that holds the first node equal to `value`, or the empty slot where the
    /// search ran out.
    fn slot_of<'a>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
        while slot.as_ref().is_some_and(|node| *value != node.value) {
            let node = slot.as_mut().expect("checked non-empty above");
            slot = if *value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        slot
    }

    /// Builds the subtree that replaces a removed node with two children.
    ///
    /// The largest node of `left` (the removed node's predecessor) is detached along with its
    /// own left subtree and becomes the new subtree root. `right` hangs off its right side and
    /// whatever remains of `left` hangs off its left-most descendant. Everything left in `left`
    /// is no greater than anything under the predecessor, so the order holds.
    ///
    /// ```text
    ///        target                     pred
    ///       /      \                   /    \
    ///      l        r     ->         pl      r
    ///     / \                       /
    ///    a   pred                  l
    ///        /                    /
    ///       pl                   a
    /// ```
    fn splice_predecessor(left: Box<Node<T>>, right: Box<Node<T>>) -> Box<Node<T>> {
        let mut remainder = Some(left);
        let mut predecessor = Self::detach_rightmost(&mut remainder)
            .expect("a non-empty subtree has a right-most node");

        predecessor.right = Some(right);
        Self::leftmost_mut(&mut predecessor).left = remainder;
        predecessor
    }

    /// Detaches the node reached by following right children from `slot` as far as possible.
    /// The node keeps its left subtree.
    fn detach_rightmost(mut slot: &mut Link<T>) -> Link<T> {
        while slot.as_ref().is_some_and(|node| node.right.is_some()) {
            slot = &mut slot
                .as_mut()
                .expect("checked non-empty above")
                .right;
        }
        slot.take()
    }

    fn leftmost_mut(mut node: &mut Box<Node<T>>) -> &mut Box<Node<T>> {
        loop {
            match node.left {
                Some(ref mut left) => node = left,
                None => return node,
            }
        }
    }
}

impl<T> OrderedCollection<T> for OrderedTree<T>
where
    T: Ord,
{
    fn insert(&mut self, value: T) {
        OrderedTree::insert(self, value);
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        OrderedTree::remove(self, value)
    }

    fn visit_in_order<'a>(&'a self, visit: &mut dyn FnMut(&'a T)) {
        self.for_each(visit);
    }

    fn minimum(&self) -> ExtremumResult<'_, T> {
        OrderedTree::minimum(self)
    }

    fn maximum(&self) -> ExtremumResult<'_, T> {
        OrderedTree::maximum(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        OrderedTree::is_empty(self)
    }

    fn traverse(&self) -> Vec<&T> {
        OrderedTree::traverse(self)
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
