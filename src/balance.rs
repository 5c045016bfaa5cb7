//! Structural AVL operations: the four rotations and the rebalance step
//! applied to every ancestor on the way back up from a mutation.
//!
//! All functions operate on an owning slot in place. A rotation swaps the
//! moved-up node into the slot, so the parent keeps pointing at whatever
//! now roots the subtree.

use alloc::boxed::Box;
use core::mem;

use crate::node::{height, Link, Node};

/// Largest height difference tolerated between two sibling subtrees.
pub const ALLOWED_IMBALANCE: i32 = 1;

/// Restore the AVL property at `slot`, assuming both subtrees are balanced
/// and differ in height by at most `ALLOWED_IMBALANCE + 1`.
///
/// Always refreshes the cached height of whatever ends up rooting the slot.
pub(crate) fn balance<T>(slot: &mut Link<T>) {
    let Some(node) = slot.as_mut() else {
        return;
    };

    let factor = node.balance_factor();
    if factor > ALLOWED_IMBALANCE {
        if outer_left_is_taller(&node.left) {
            rotate_with_left_child(node);
        } else {
            double_with_left_child(node);
        }
    } else if factor < -ALLOWED_IMBALANCE {
        if outer_right_is_taller(&node.right) {
            rotate_with_right_child(node);
        } else {
            double_with_right_child(node);
        }
    }
    node.update_height();
}

/// `height(left.left) >= height(left.right)`: the single-rotation case.
fn outer_left_is_taller<T>(left: &Link<T>) -> bool {
    left.as_ref().is_some_and(|l| height(&l.left) >= height(&l.right))
}

/// `height(right.right) >= height(right.left)`: the single-rotation case.
fn outer_right_is_taller<T>(right: &Link<T>) -> bool {
    right.as_ref().is_some_and(|r| height(&r.right) >= height(&r.left))
}

/// Single rotation with the left child (case 1).
///
/// ```text
///       k2            k1
///      /  \          /  \
///     k1   Z   =>   X    k2
///    /  \               /  \
///   X    Y             Y    Z
/// ```
pub(crate) fn rotate_with_left_child<T>(k2: &mut Box<Node<T>>) {
    let Some(mut k1) = k2.left.take() else {
        return;
    };
    k2.left = k1.right.take();
    k2.update_height();

    // `k2` now holds k1, `k1` holds the old root which becomes the right child.
    mem::swap(k2, &mut k1);
    k2.right = Some(k1);
    k2.update_height();
}

/// Single rotation with the right child (case 4). Mirror of
/// [`rotate_with_left_child`].
pub(crate) fn rotate_with_right_child<T>(k1: &mut Box<Node<T>>) {
    let Some(mut k2) = k1.right.take() else {
        return;
    };
    k1.right = k2.left.take();
    k1.update_height();

    mem::swap(k1, &mut k2);
    k1.left = Some(k2);
    k1.update_height();
}

/// Double rotation for case 2: rotate the left child with its right child,
/// then `k3` with its new left child.
pub(crate) fn double_with_left_child<T>(k3: &mut Box<Node<T>>) {
    if let Some(left) = k3.left.as_mut() {
        rotate_with_right_child(left);
    }
    rotate_with_left_child(k3);
}

/// Double rotation for case 3: rotate the right child with its left child,
/// then `k1` with its new right child.
pub(crate) fn double_with_right_child<T>(k1: &mut Box<Node<T>>) {
    if let Some(right) = k1.right.as_mut() {
        rotate_with_left_child(right);
    }
    rotate_with_right_child(k1);
}
