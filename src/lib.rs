//! # avl-index
//!
//! A self-balancing AVL tree used as an in-memory ordered index over
//! mergeable key-multivalue records.
//!
//! Elements are ordered with [`Ord`]. Inserting an element whose key is
//! already present never duplicates it: the resident element absorbs the
//! incoming one through the [`Merge`] trait. Every insert and remove
//! rebalances the nodes on its descent path, so the height of the tree
//! stays logarithmic in its size.
//!
//! ## `no_std` Support
//!
//! The tree only needs `alloc`. Disable the default `std` feature in your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! avl-index = { version = "0.1", default-features = false }
//! ```
//!
//! Note: [`AvlTree::print_tree`] requires the `std` feature; use
//! [`AvlTree::write_tree`] with any [`core::fmt::Write`] sink otherwise.
//!
//! ## Quick Start
//!
//! ```
//! use avl_index::prelude::*;
//!
//! let mut index = AvlTree::new();
//! for key in ["AA", "AC", "AG", "AT"] {
//!     index.insert(SequenceMap::new(key, "E1"));
//! }
//! assert_eq!(index.count(), 4);
//! assert!(index.height() <= 2);
//!
//! // Recursion counters report the cost of a lookup without running it.
//! assert_eq!(index.find_recursion_count("AC"), 0);
//! ```
//!
//! ## Instrumentation
//!
//! [`AvlTree::find_recursion_count`] and [`AvlTree::remove_recursion_count`]
//! report the number of recursive descent steps the matching operation
//! would take. They are read-only and may be called any number of times.
//!
//! ## Enzyme Records
//!
//! [`SequenceMap`] maps a restriction-enzyme recognition sequence to every
//! enzyme acronym that cuts at it, and the [`rebase`] module loads a
//! REBASE-style flat file into a tree of them.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod balance;
mod error;
mod instrument;
mod invariants;
mod merge;
mod node;
mod sequence_map;
mod tree;

pub mod prelude;
pub mod rebase;

pub use balance::ALLOWED_IMBALANCE;
pub use error::TreeError;
pub use invariants::InvariantViolation;
pub use merge::Merge;
pub use sequence_map::SequenceMap;
pub use tree::{AvlTree, Iter};
