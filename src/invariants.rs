//! Structural invariant checks.
//!
//! [`AvlTree::check_invariants`] walks every node and verifies the three
//! properties every completed mutation must leave behind: cached heights
//! are exact, sibling heights differ by at most one, and the in-order
//! sequence is strictly increasing.

use core::fmt;

use crate::balance::ALLOWED_IMBALANCE;
use crate::node::Link;
use crate::AvlTree;

/// A broken structural invariant, located by the node's in-order position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The cached height differs from `1 + max(height(left), height(right))`.
    StaleHeight {
        /// In-order index of the offending node.
        position: usize,
        /// Height stored in the node.
        cached: i32,
        /// Height recomputed from the children.
        actual: i32,
    },
    /// Sibling subtree heights differ by more than the allowed imbalance.
    Unbalanced {
        /// In-order index of the offending node.
        position: usize,
        /// `height(left) - height(right)`.
        balance_factor: i32,
    },
    /// An element does not compare strictly greater than its predecessor.
    OutOfOrder {
        /// In-order index of the offending node.
        position: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleHeight {
                position,
                cached,
                actual,
            } => write!(
                f,
                "node {position}: cached height {cached}, recomputed height {actual}"
            ),
            Self::Unbalanced {
                position,
                balance_factor,
            } => write!(f, "node {position}: balance factor {balance_factor}"),
            Self::OutOfOrder { position } => {
                write!(f, "node {position}: not greater than its predecessor")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvariantViolation {}

impl<T: Ord> AvlTree<T> {
    /// Verify the AVL and ordering invariants across the whole tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] met in in-order position.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut walk = Walk {
            position: 0,
            previous: None,
        };
        walk.visit(&self.root).map(|_| ())
    }
}

struct Walk<'a, T> {
    position: usize,
    previous: Option<&'a T>,
}

impl<'a, T: Ord> Walk<'a, T> {
    /// Returns the recomputed height of `link`.
    fn visit(&mut self, link: &'a Link<T>) -> Result<i32, InvariantViolation> {
        let Some(node) = link else {
            return Ok(-1);
        };

        let left = self.visit(&node.left)?;

        let position = self.position;
        if self.previous.is_some_and(|prev| prev >= &node.element) {
            return Err(InvariantViolation::OutOfOrder { position });
        }
        self.previous = Some(&node.element);
        self.position += 1;

        let right = self.visit(&node.right)?;

        let actual = 1 + left.max(right);
        if node.height != actual {
            return Err(InvariantViolation::StaleHeight {
                position,
                cached: node.height,
                actual,
            });
        }

        let balance_factor = left - right;
        if balance_factor.abs() > ALLOWED_IMBALANCE {
            return Err(InvariantViolation::Unbalanced {
                position,
                balance_factor,
            });
        }
        Ok(actual)
    }
}
