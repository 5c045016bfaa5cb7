use core::fmt;

/// Errors returned by [`AvlTree`](crate::AvlTree) queries.
///
/// A missing key is not an error: `find`, `contains` and `remove` report
/// absence through their ordinary return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `find_min` or `find_max` was called on an empty tree.
    Underflow,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow => write!(f, "underflow: the tree is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TreeError {}
