//! Recursion-count instrumentation.
//!
//! These queries report how many recursive descent steps the matching
//! `find` or `remove` performs, as an empirical proxy for algorithmic
//! cost. They walk the tree read-only and never touch its shape, so
//! repeated calls with no intervening mutation return the same count.

use core::borrow::Borrow;
use core::cmp::Ordering;

use crate::node::{Link, Node};
use crate::AvlTree;

impl<T> AvlTree<T> {
    /// Descent steps `find(key)` takes.
    ///
    /// Counts one step per child followed. A match at the root costs 0;
    /// a miss costs the number of steps taken before reaching an empty
    /// slot.
    #[must_use]
    pub fn find_recursion_count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        find_recursion_count(&self.root, key)
    }

    /// Descent steps `remove(key)` takes.
    ///
    /// For a node with two children this adds two steps for the successor
    /// hand-off, the steps to locate the in-order successor, and the
    /// steps to descend to it again and splice it out.
    #[must_use]
    pub fn remove_recursion_count<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        remove_recursion_count(&self.root, key)
    }

    /// `find(key)` together with its descent step count.
    #[must_use]
    pub fn find_traced<Q>(&self, key: &Q) -> (Option<&T>, usize)
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        (self.find(key), self.find_recursion_count(key))
    }
}

fn find_recursion_count<T, Q>(link: &Link<T>, key: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return 0;
    };
    match key.cmp(node.element.borrow()) {
        Ordering::Less => 1 + find_recursion_count(&node.left, key),
        Ordering::Greater => 1 + find_recursion_count(&node.right, key),
        Ordering::Equal => 0,
    }
}

fn remove_recursion_count<T, Q>(link: &Link<T>, key: &Q) -> usize
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(node) = link else {
        return 0;
    };
    match key.cmp(node.element.borrow()) {
        Ordering::Less => 1 + remove_recursion_count(&node.left, key),
        Ordering::Greater => 1 + remove_recursion_count(&node.right, key),
        Ordering::Equal => match (&node.left, &node.right) {
            (Some(_), Some(right)) => {
                let successor: &Q = min_element(right).borrow();
                2 + find_min_recursion_count(&node.right)
                    + remove_recursion_count(&node.right, successor)
            }
            _ => 0,
        },
    }
}

/// Steps needed to walk from `link` down to its leftmost node.
fn find_min_recursion_count<T>(link: &Link<T>) -> usize {
    match link {
        Some(node) if node.left.is_some() => 1 + find_min_recursion_count(&node.left),
        _ => 0,
    }
}

fn min_element<T>(mut node: &Node<T>) -> &T {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    &node.element
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> AvlTree<u32> {
        //         40
        //       /    \
        //     20      60
        //    /  \    /  \
        //  10   30  50   70
        //             \
        //             55
        vec![40, 20, 60, 10, 30, 50, 70, 55].into_iter().collect()
    }

    #[test]
    fn find_count_is_depth_of_match() {
        let tree = sample();
        assert_eq!(tree.find_recursion_count(&40), 0);
        assert_eq!(tree.find_recursion_count(&20), 1);
        assert_eq!(tree.find_recursion_count(&55), 3);
    }

    #[test]
    fn find_count_on_miss_counts_steps_to_empty_slot() {
        let tree = sample();
        // 40 -> 20 -> 10 -> (empty left of 10)
        assert_eq!(tree.find_recursion_count(&5), 3);
        assert_eq!(AvlTree::<u32>::new().find_recursion_count(&5), 0);
    }

    #[test]
    fn remove_count_for_leaf_matches_find_count() {
        let tree = sample();
        assert_eq!(tree.remove_recursion_count(&10), tree.find_recursion_count(&10));
        assert_eq!(tree.remove_recursion_count(&55), 3);
    }

    #[test]
    fn remove_count_for_two_children_includes_successor_walk() {
        let tree = sample();
        // 40's successor 50 sits one step left of 60: 2 for the hand-off,
        // 1 to locate it, 1 to descend to it again for the splice.
        assert_eq!(tree.remove_recursion_count(&40), 4);
        // 60's successor is 70, reached with no left steps.
        assert_eq!(tree.remove_recursion_count(&60), 1 + 2);
    }

    #[test]
    fn find_min_count() {
        let tree = sample();
        assert_eq!(find_min_recursion_count(&tree.root), 2);
        assert_eq!(find_min_recursion_count::<u32>(&None), 0);
    }

    #[test]
    fn counters_do_not_mutate() {
        let tree = sample();
        let before = tree.clone();
        let first = tree.remove_recursion_count(&40);
        let second = tree.remove_recursion_count(&40);
        assert_eq!(first, second);
        assert_eq!(tree.root, before.root);
    }

    #[test]
    fn traced_find_pairs_result_with_count() {
        let tree = sample();
        assert_eq!(tree.find_traced(&30), (Some(&30), 2));
        assert_eq!(tree.find_traced(&31), (None, 3));
    }
}
