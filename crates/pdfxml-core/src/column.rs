//! Column classification strategies.
//!
//! A [`ColumnClassifier`] maps a fragment's horizontal position to a column
//! index. [`RangeClassifier`] provides the two standard strategies: explicit
//! `[from, to]` ranges and representative positions with a variance.

use crate::error::ConfigError;
use crate::text::TextFragment;

/// Maps a fragment to the column it belongs to.
///
/// Returning `None` means the fragment matches no column; the extraction
/// engine then drops it without touching the current row.
pub trait ColumnClassifier: Send + Sync {
    /// Column index for `fragment`, or `None` if no column matches.
    fn classify(&self, fragment: &TextFragment) -> Option<usize>;

    /// Number of distinct columns this strategy can produce, if known.
    fn column_count(&self) -> Option<usize> {
        None
    }
}

impl<F> ColumnClassifier for F
where
    F: Fn(&TextFragment) -> Option<usize> + Send + Sync,
{
    fn classify(&self, fragment: &TextFragment) -> Option<usize> {
        self(fragment)
    }
}

/// Inclusive horizontal range `[from, to]` for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRange {
    pub from: i64,
    pub to: i64,
}

impl ColumnRange {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Whether `left` lies within the range, both ends inclusive.
    pub fn contains(&self, left: i64) -> bool {
        left >= self.from && left <= self.to
    }
}

/// Classifies fragments by the first range containing their `left` edge.
///
/// The column index is the range's position in the list. Overlapping ranges
/// are allowed; the earliest listed range wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeClassifier {
    ranges: Vec<ColumnRange>,
}

impl RangeClassifier {
    /// Build a classifier from ordered column ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoColumnRanges`] for an empty list and
    /// [`ConfigError::InvalidRange`] for a range with `from > to`.
    pub fn new(ranges: Vec<ColumnRange>) -> Result<Self, ConfigError> {
        if ranges.is_empty() {
            return Err(ConfigError::NoColumnRanges);
        }
        if let Some((index, r)) = ranges.iter().enumerate().find(|(_, r)| r.from > r.to) {
            return Err(ConfigError::InvalidRange {
                index,
                from: r.from,
                to: r.to,
            });
        }
        Ok(Self { ranges })
    }

    /// Build a classifier from one representative position per column.
    ///
    /// Each column covers `[position - tolerance / 2, position + tolerance / 2]`
    /// using integer division, so an odd tolerance loses one unit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoColumnRanges`] if `positions` is empty, or
    /// [`ConfigError::PositionOverflow`] if a widened position does not fit
    /// in an `i64`.
    pub fn with_variance(positions: &[i64], tolerance: u32) -> Result<Self, ConfigError> {
        let half = i64::from(tolerance / 2);
        let ranges = positions
            .iter()
            .enumerate()
            .map(|(index, &p)| match (p.checked_sub(half), p.checked_add(half)) {
                (Some(from), Some(to)) => Ok(ColumnRange::new(from, to)),
                _ => Err(ConfigError::PositionOverflow {
                    index,
                    position: p,
                    tolerance,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ranges)
    }

    /// The configured ranges, in column order.
    pub fn ranges(&self) -> &[ColumnRange] {
        &self.ranges
    }
}

impl ColumnClassifier for RangeClassifier {
    fn classify(&self, fragment: &TextFragment) -> Option<usize> {
        self.ranges.iter().position(|r| r.contains(fragment.left))
    }

    fn column_count(&self) -> Option<usize> {
        Some(self.ranges.len())
    }
}

/// Range-based classifier from `(from, to)` pairs.
pub fn range_classifier(ranges: &[(i64, i64)]) -> Result<RangeClassifier, ConfigError> {
    RangeClassifier::new(
        ranges
            .iter()
            .map(|&(from, to)| ColumnRange::new(from, to))
            .collect(),
    )
}

/// Variance-based classifier around representative column positions.
pub fn variance_classifier(
    positions: &[i64],
    tolerance: u32,
) -> Result<RangeClassifier, ConfigError> {
    RangeClassifier::with_variance(positions, tolerance)
}
