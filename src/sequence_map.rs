use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;

use crate::Merge;

/// A restriction-enzyme record: one recognition sequence and every enzyme
/// acronym known to cut at it.
///
/// Ordering and equality look only at the recognition sequence, so a tree
/// of `SequenceMap`s is keyed by sequence and can be queried with a plain
/// `&str`. Merging two records with the same sequence appends the
/// acronyms the resident record has not seen yet, in first-seen order.
///
/// # Example
///
/// ```
/// use avl_index::prelude::*;
///
/// let mut a = SequenceMap::new("GAATTC", "EcoRI");
/// a.merge(SequenceMap::new("GAATTC", "FunII"));
/// a.merge(SequenceMap::new("GAATTC", "EcoRI"));
///
/// assert_eq!(a.enzyme_acronyms(), ["EcoRI", "FunII"]);
/// assert_eq!(a.to_string(), "EcoRI FunII ");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceMap {
    recognition_sequence: String,
    enzyme_acronyms: Vec<String>,
}

impl SequenceMap {
    /// Create a record for `sequence` cut by a single enzyme.
    pub fn new(sequence: impl Into<String>, acronym: impl Into<String>) -> Self {
        Self {
            recognition_sequence: sequence.into(),
            enzyme_acronyms: vec![acronym.into()],
        }
    }

    /// The recognition sequence this record is keyed by.
    #[must_use]
    pub fn recognition_sequence(&self) -> &str {
        &self.recognition_sequence
    }

    /// Enzyme acronyms in first-seen order, without duplicates.
    #[must_use]
    pub fn enzyme_acronyms(&self) -> &[String] {
        &self.enzyme_acronyms
    }
}

impl Merge for SequenceMap {
    fn merge(&mut self, other: Self) {
        if self.recognition_sequence != other.recognition_sequence {
            return;
        }
        for acronym in other.enzyme_acronyms {
            if !self.enzyme_acronyms.contains(&acronym) {
                self.enzyme_acronyms.push(acronym);
            }
        }
    }
}

impl PartialEq for SequenceMap {
    fn eq(&self, other: &Self) -> bool {
        self.recognition_sequence == other.recognition_sequence
    }
}

impl Eq for SequenceMap {}

impl PartialOrd for SequenceMap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SequenceMap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.recognition_sequence.cmp(&other.recognition_sequence)
    }
}

impl Borrow<str> for SequenceMap {
    fn borrow(&self) -> &str {
        &self.recognition_sequence
    }
}

impl fmt::Display for SequenceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for acronym in &self.enzyme_acronyms {
            write!(f, "{acronym} ")?;
        }
        Ok(())
    }
}
