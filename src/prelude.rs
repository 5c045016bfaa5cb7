//! Convenient re-exports for common usage.
//!
//! ```
//! use avl_index::prelude::*;
//! ```

pub use crate::AvlTree;
pub use crate::Merge;
pub use crate::SequenceMap;
pub use crate::TreeError;
