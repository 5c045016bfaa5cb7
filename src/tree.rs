use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::balance::balance;
use crate::node::{height, Link, Node};
use crate::{Merge, TreeError};

/// A self-balancing binary search tree (AVL tree) over mergeable elements.
///
/// Elements are ordered by [`Ord`]. Inserting an element that compares
/// equal to one already present does not create a second node: the
/// resident element absorbs the newcomer through [`Merge::merge`]. After
/// every insert or remove, each ancestor on the descent path is
/// rebalanced so that sibling subtree heights never differ by more than
/// [`ALLOWED_IMBALANCE`](crate::ALLOWED_IMBALANCE).
///
/// # Example
///
/// ```
/// use avl_index::prelude::*;
///
/// let mut index = AvlTree::new();
/// index.insert(SequenceMap::new("AC", "E1"));
/// index.insert(SequenceMap::new("AC", "E2"));
/// index.insert(SequenceMap::new("AA", "E3"));
///
/// assert_eq!(index.count(), 2);
/// assert_eq!(index.find("AC").unwrap().enzyme_acronyms(), ["E1", "E2"]);
/// assert_eq!(index.find_min().unwrap().recognition_sequence(), "AA");
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    pub(crate) root: Link<T>,
}

impl<T> AvlTree<T> {
    /// Create a new empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Check if the tree holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drop every node, leaving the tree empty.
    pub fn make_empty(&mut self) {
        self.root = None;
    }

    /// Number of nodes, computed by a full traversal.
    #[must_use]
    pub fn count(&self) -> usize {
        count(&self.root)
    }

    /// Height of the whole tree: `-1` when empty, `0` for a single node.
    #[must_use]
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Sum of every node's depth, with the root at depth 0.
    #[must_use]
    pub fn total_depth(&self) -> usize {
        total_depth(&self.root, 0)
    }

    /// Average node depth: [`total_depth`](Self::total_depth) divided by
    /// [`count`](Self::count).
    ///
    /// The division is not guarded. On an empty tree the result is NaN,
    /// and callers that may see an empty tree must check
    /// [`is_empty`](Self::is_empty) first.
    #[must_use]
    pub fn avg_depth(&self) -> f64 {
        self.total_depth() as f64 / self.count() as f64
    }

    /// Smallest element in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::Underflow)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.element)
    }

    /// Largest element in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::Underflow)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.element)
    }

    /// Look up the element matching `key`.
    ///
    /// Returns a reference to the stored element, or `None` if absent.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find(&self.root, key).map(|node| &node.element)
    }

    /// Check if an element matching `key` is present.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find(&self.root, key).is_some()
    }

    /// Remove the element matching `key`, rebalancing on the way back up.
    ///
    /// Returns the removed element, or `None` (leaving the tree untouched)
    /// if no element matches. A node with two children takes over its
    /// in-order successor's element, and the successor's node is the one
    /// unlinked from the right subtree.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove(&mut self.root, key)
    }

    /// Iterate over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Write the in-order dump, one element per line, or `Empty tree`.
    pub fn write_tree<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return writeln!(out, "Empty tree");
        }
        for element in self.iter() {
            writeln!(out, "{element}")?;
        }
        Ok(())
    }

    /// Print the in-order dump to stdout.
    #[cfg(feature = "std")]
    pub fn print_tree(&self)
    where
        T: fmt::Display,
    {
        print!("{self}");
    }
}

impl<T: Ord + Merge> AvlTree<T> {
    /// Insert `element`, merging it into an equal element if one exists.
    ///
    /// Returns `true` if a new node was created, `false` if the element
    /// was merged into an existing one.
    pub fn insert(&mut self, element: T) -> bool {
        insert(&mut self.root, element)
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}

impl<T: Ord + Merge> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord + Merge> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.element)
    }
}

fn count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

fn total_depth<T>(link: &Link<T>, depth: usize) -> usize {
    match link {
        None => 0,
        Some(node) => {
            depth + total_depth(&node.left, depth + 1) + total_depth(&node.right, depth + 1)
        }
    }
}

fn find<'a, T, Q>(link: &'a Link<T>, key: &Q) -> Option<&'a Node<T>>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = link.as_deref()?;
    match key.cmp(node.element.borrow()) {
        Ordering::Less => find(&node.left, key),
        Ordering::Greater => find(&node.right, key),
        Ordering::Equal => Some(node),
    }
}

fn insert<T: Ord + Merge>(slot: &mut Link<T>, element: T) -> bool {
    let Some(node) = slot.as_mut() else {
        *slot = Some(Node::leaf(element));
        return true;
    };

    let created = match element.cmp(&node.element) {
        Ordering::Less => insert(&mut node.left, element),
        Ordering::Greater => insert(&mut node.right, element),
        Ordering::Equal => {
            node.element.merge(element);
            false
        }
    };
    balance(slot);
    created
}

fn remove<T, Q>(slot: &mut Link<T>, key: &Q) -> Option<T>
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = slot.as_mut()?;

    let removed = match key.cmp(node.element.borrow()) {
        Ordering::Less => remove(&mut node.left, key),
        Ordering::Greater => remove(&mut node.right, key),
        Ordering::Equal if node.has_two_children() => {
            // Successor always exists: the right subtree is non-empty.
            let successor = remove_min(&mut node.right)?;
            Some(mem::replace(&mut node.element, successor))
        }
        Ordering::Equal => {
            let child = node.left.take().or_else(|| node.right.take());
            mem::replace(slot, child).map(|old| old.element)
        }
    };
    balance(slot);
    removed
}

/// Unlink the leftmost node under `slot`, rebalancing each ancestor.
fn remove_min<T>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;

    let removed = if node.left.is_some() {
        remove_min(&mut node.left)
    } else {
        let right = node.right.take();
        mem::replace(slot, right).map(|old| old.element)
    };
    balance(slot);
    removed
}
