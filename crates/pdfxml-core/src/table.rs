//! Table extraction from positioned text.
//!
//! This module provides the configuration types, row data structures, and the
//! row grouping engine that turns a page's text fragments into table rows.
//!
//! Pipeline: band selection → reading-order sort → row grouping (with column
//! classification per fragment) → optional row validation.

use std::fmt;

use crate::column::ColumnClassifier;
use crate::error::ConfigError;
use crate::select::select_fragments;
use crate::text::TextFragment;
use crate::validator::RowValidator;

/// Plain settings for table extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSettings {
    /// Upper edge of the vertical band (inclusive).
    pub from: i64,
    /// Lower edge of the vertical band (inclusive).
    pub to: i64,
    /// Number of column slots in every row.
    pub columns: usize,
    /// Maximum `top` distance from a row's first fragment for a fragment to
    /// stay in that row.
    pub tolerance: u32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            from: i64::MIN,
            to: i64::MAX,
            columns: 1,
            tolerance: 0,
        }
    }
}

impl TableSettings {
    /// Check the settings on their own, independent of any column strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.from > self.to {
            return Err(ConfigError::EmptyBand {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}

/// A fully validated table extraction request.
///
/// Bundles [`TableSettings`] with the column strategy and an optional row
/// validator. Built with [`TableExtractionRequest::new`], which rejects bad
/// configuration before any extraction happens.
pub struct TableExtractionRequest {
    settings: TableSettings,
    classifier: Box<dyn ColumnClassifier>,
    validator: Option<Box<dyn RowValidator>>,
}

impl TableExtractionRequest {
    /// Create a request without a row validator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the settings are invalid or the classifier
    /// declares more columns than `settings.columns`.
    pub fn new(
        settings: TableSettings,
        classifier: impl ColumnClassifier + 'static,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        if let Some(count) = classifier.column_count() {
            if count > settings.columns {
                return Err(ConfigError::TooManyColumns {
                    classifier: count,
                    configured: settings.columns,
                });
            }
        }
        Ok(Self {
            settings,
            classifier: Box::new(classifier),
            validator: None,
        })
    }

    /// Attach a row validator, replacing any previous one.
    pub fn with_validator(mut self, validator: impl RowValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }
}

impl fmt::Debug for TableExtractionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableExtractionRequest")
            .field("settings", &self.settings)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Content written into one column slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellContent {
    /// Plain text of the source fragment.
    pub text: String,
    /// Emphasized text of the source fragment, if any.
    pub bold: Option<String>,
}

impl CellContent {
    /// The emphasized content when present, otherwise the plain text.
    pub fn display_text(&self) -> &str {
        self.bold.as_deref().unwrap_or(&self.text)
    }
}

impl From<&TextFragment> for CellContent {
    fn from(fragment: &TextFragment) -> Self {
        Self {
            text: fragment.text.clone(),
            bold: fragment.bold.clone(),
        }
    }
}

/// Extent of the fragments placed in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryBounds {
    pub min_left: i64,
    pub max_left: i64,
    pub min_top: i64,
    pub max_top: i64,
}

impl EntryBounds {
    fn at(fragment: &TextFragment) -> Self {
        Self {
            min_left: fragment.left,
            max_left: fragment.left,
            min_top: fragment.top,
            max_top: fragment.top,
        }
    }

    fn include(&mut self, fragment: &TextFragment) {
        self.min_left = self.min_left.min(fragment.left);
        self.max_left = self.max_left.max(fragment.left);
        self.min_top = self.min_top.min(fragment.top);
        self.max_top = self.max_top.max(fragment.top);
    }
}

/// One extracted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEntry {
    /// Extent of the placed fragments; `None` while the row has none.
    pub bounds: Option<EntryBounds>,
    /// One slot per configured column.
    pub cells: Vec<Option<CellContent>>,
}

impl TableEntry {
    /// Create an empty row with `columns` slots.
    pub fn new(columns: usize) -> Self {
        Self {
            bounds: None,
            cells: vec![None; columns],
        }
    }

    /// Content of the slot at `column`, if filled.
    pub fn cell(&self, column: usize) -> Option<&CellContent> {
        self.cells.get(column).and_then(Option::as_ref)
    }

    /// Number of filled slots.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if no fragment was placed in this row.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Display text per slot, `None` for empty slots.
    pub fn texts(&self) -> Vec<Option<&str>> {
        self.cells
            .iter()
            .map(|c| c.as_ref().map(CellContent::display_text))
            .collect()
    }

    pub fn min_left(&self) -> Option<i64> {
        self.bounds.map(|b| b.min_left)
    }

    pub fn max_left(&self) -> Option<i64> {
        self.bounds.map(|b| b.max_left)
    }

    pub fn min_top(&self) -> Option<i64> {
        self.bounds.map(|b| b.min_top)
    }

    pub fn max_top(&self) -> Option<i64> {
        self.bounds.map(|b| b.max_top)
    }

    /// Write `fragment` into `column`, overwriting earlier content.
    fn place(&mut self, column: usize, fragment: &TextFragment) {
        self.cells[column] = Some(CellContent::from(fragment));
        match self.bounds.as_mut() {
            Some(bounds) => bounds.include(fragment),
            None => self.bounds = Some(EntryBounds::at(fragment)),
        }
    }
}

/// The row currently accepting fragments, with the `top` it was opened at.
struct OpenRow {
    pivot: i64,
    entry: TableEntry,
}

/// State machine that partitions ordered fragments into rows.
///
/// At most one row is open. When a fragment fails the same-line test the
/// open row is closed and settled: kept, or dropped if the validator rejects
/// it. Closed rows lose their pivot, so they never take part in another
/// same-line test.
struct RowGrouper<'r> {
    request: &'r TableExtractionRequest,
    rows: Vec<TableEntry>,
    open: Option<OpenRow>,
}

impl<'r> RowGrouper<'r> {
    fn new(request: &'r TableExtractionRequest) -> Self {
        Self {
            request,
            rows: Vec::new(),
            open: None,
        }
    }

    fn push(&mut self, fragment: &TextFragment) {
        let tolerance = i64::from(self.request.settings.tolerance);
        // Only the downward distance is checked; callers feed fragments
        // sorted by `top`.
        let same_line = self
            .open
            .as_ref()
            .is_some_and(|row| fragment.top.saturating_sub(row.pivot) <= tolerance);

        if !same_line {
            let next = OpenRow {
                pivot: fragment.top,
                entry: TableEntry::new(self.request.settings.columns),
            };
            if let Some(closed) = self.open.replace(next) {
                self.settle(closed.entry);
            }
        }

        let columns = self.request.settings.columns;
        let Some(column) = self
            .request
            .classifier
            .classify(fragment)
            .filter(|&c| c < columns)
        else {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                top = fragment.top,
                left = fragment.left,
                "fragment matches no column, dropped"
            );
            return;
        };

        if let Some(row) = self.open.as_mut() {
            row.entry.place(column, fragment);
        }
    }

    fn settle(&mut self, entry: TableEntry) {
        let keep = match &self.request.validator {
            Some(validator) => validator.is_valid(&entry),
            None => true,
        };
        if keep {
            self.rows.push(entry);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                min_top = ?entry.min_top(),
                filled = entry.filled_count(),
                "row rejected by validator"
            );
        }
    }

    fn finish(mut self) -> Vec<TableEntry> {
        if let Some(last) = self.open.take() {
            self.settle(last.entry);
        }
        self.rows
    }
}

/// Group already-ordered fragments into rows.
///
/// Fragments are consumed as given; no band filtering or sorting happens
/// here. The same-line test is `fragment.top - pivot <= tolerance`, so a
/// fragment above the open row's pivot always joins it.
pub fn group_rows<'a, I>(fragments: I, request: &TableExtractionRequest) -> Vec<TableEntry>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut grouper = RowGrouper::new(request);
    for fragment in fragments {
        grouper.push(fragment);
    }
    grouper.finish()
}

/// Extract table rows from a page's fragments.
///
/// Selects fragments within the request's vertical band, orders them
/// top-to-bottom then left-to-right, and groups them into rows. Fragments
/// that match no column are dropped silently: they fill no slot and do not
/// extend the row's bounds.
pub fn extract_table(
    fragments: &[TextFragment],
    request: &TableExtractionRequest,
) -> Vec<TableEntry> {
    let settings = request.settings();
    let ordered = select_fragments(fragments, settings.from, settings.to);
    group_rows(ordered, request)
}
