//! Row validation predicates.
//!
//! A [`RowValidator`] is consulted once for every row the extraction engine
//! closes. Rejected rows are dropped from the output and the following row
//! takes their place.

use regex::Regex;

use crate::table::TableEntry;

/// Decides whether a completed row is kept.
///
/// Implementations see only the row passed to them and must not rely on
/// neighbouring rows.
pub trait RowValidator: Send + Sync {
    fn is_valid(&self, entry: &TableEntry) -> bool;
}

impl<F> RowValidator for F
where
    F: Fn(&TableEntry) -> bool + Send + Sync,
{
    fn is_valid(&self, entry: &TableEntry) -> bool {
        self(entry)
    }
}

/// Keeps rows with at least this many filled column slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinFilledCells(pub usize);

impl RowValidator for MinFilledCells {
    fn is_valid(&self, entry: &TableEntry) -> bool {
        entry.filled_count() >= self.0
    }
}

/// Keeps rows where every listed column slot is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredColumns(pub Vec<usize>);

impl RowValidator for RequiredColumns {
    fn is_valid(&self, entry: &TableEntry) -> bool {
        self.0.iter().all(|&c| entry.cell(c).is_some())
    }
}

/// Keeps rows whose slot in `column` holds text matching `pattern`.
///
/// The emphasized content is matched when present, the plain text otherwise.
/// An empty slot never matches.
#[derive(Debug, Clone)]
pub struct ColumnMatches {
    column: usize,
    pattern: Regex,
}

impl ColumnMatches {
    /// Compile `pattern` for matching the given column.
    pub fn new(column: usize, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            column,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl RowValidator for ColumnMatches {
    fn is_valid(&self, entry: &TableEntry) -> bool {
        entry
            .cell(self.column)
            .is_some_and(|cell| self.pattern.is_match(cell.display_text()))
    }
}

/// Keeps rows accepted by every inner validator. An empty list accepts all.
#[derive(Default)]
pub struct AllOf(pub Vec<Box<dyn RowValidator>>);

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator, returning the combined validator.
    pub fn and(mut self, validator: impl RowValidator + 'static) -> Self {
        self.0.push(Box::new(validator));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RowValidator for AllOf {
    fn is_valid(&self, entry: &TableEntry) -> bool {
        self.0.iter().all(|v| v.is_valid(entry))
    }
}
