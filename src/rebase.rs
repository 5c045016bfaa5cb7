//! Parser for REBASE-style restriction-enzyme database files.
//!
//! A database starts with [`HEADER_LINES`] lines of free text. After that,
//! each whitespace-separated record names one enzyme and the recognition
//! sequences it cuts:
//!
//! ```text
//! AarI/CACCTGCNNNN'NNNN/'NNNNNNNNGCAGGTG//
//! ```
//!
//! Each sequence becomes its own [`SequenceMap`] carrying the acronym, so
//! loading a file into an [`AvlTree`] merges enzymes sharing a sequence.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{AvlTree, SequenceMap};

/// Number of free-text lines preceding the records.
pub const HEADER_LINES: usize = 10;

const TERMINATOR: &str = "//";
const SEPARATOR: char = '/';

/// A record that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based line number within the input.
    pub line: usize,
    /// What was wrong with the line.
    pub kind: ParseErrorKind,
}

/// The reason a record line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The record does not end with `//`.
    MissingTerminator(String),
    /// The record has no enzyme acronym before the first `/`.
    MissingAcronym(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::MissingTerminator(text) => {
                write!(f, "line {}: missing `//` terminator in {text:?}", self.line)
            }
            ParseErrorKind::MissingAcronym(text) => {
                write!(f, "line {}: missing enzyme acronym in {text:?}", self.line)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a single line into one [`SequenceMap`] per sequence.
///
/// A line holds zero or more whitespace-separated records, so blank lines
/// yield nothing. `line_no` is only used for error reports.
///
/// # Errors
///
/// Returns a [`ParseError`] for the first record that lacks the `//`
/// terminator or an acronym.
pub fn parse_line(line: &str, line_no: usize) -> Result<Vec<SequenceMap>, ParseError> {
    let mut records = Vec::new();
    for record in line.split_whitespace() {
        parse_record(record, line_no, &mut records)?;
    }
    Ok(records)
}

fn parse_record(
    record: &str,
    line_no: usize,
    out: &mut Vec<SequenceMap>,
) -> Result<(), ParseError> {
    let body = record.strip_suffix(TERMINATOR).ok_or_else(|| ParseError {
        line: line_no,
        kind: ParseErrorKind::MissingTerminator(record.into()),
    })?;

    let mut fields = body.split(SEPARATOR);
    let acronym = fields.next().filter(|a| !a.is_empty()).ok_or_else(|| ParseError {
        line: line_no,
        kind: ParseErrorKind::MissingAcronym(record.into()),
    })?;

    out.extend(
        fields
            .filter(|sequence| !sequence.is_empty())
            .map(|sequence| SequenceMap::new(sequence, acronym)),
    );
    Ok(())
}

/// Parse a whole database, skipping the header lines.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_database(input: &str) -> Result<Vec<SequenceMap>, ParseError> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate().skip(HEADER_LINES) {
        records.extend(parse_line(line, index + 1)?);
    }
    Ok(records)
}

/// Parse a whole database straight into `tree`, merging shared sequences.
///
/// Returns the number of records read. On error, records from lines
/// before the failing one have already been inserted.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn load_into(input: &str, tree: &mut AvlTree<SequenceMap>) -> Result<usize, ParseError> {
    let mut loaded = 0;
    for (index, line) in input.lines().enumerate().skip(HEADER_LINES) {
        for record in parse_line(line, index + 1)? {
            tree.insert(record);
            loaded += 1;
        }
    }
    Ok(loaded)
}
