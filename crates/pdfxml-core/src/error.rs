//! Error types for pdfxml-rs.
//!
//! Provides [`PdfXmlError`] for fatal errors that stop processing and
//! [`ConfigError`] for table extraction settings rejected before any
//! fragment is looked at.

use std::fmt;

/// Fatal error types for document processing.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfXmlError {
    /// Error parsing the pdf2xml document.
    ParseError(String),
    /// I/O error reading the document.
    IoError(String),
    /// A page index outside the document was requested.
    PageOutOfRange {
        /// The requested 0-based index.
        index: usize,
        /// Number of pages in the document.
        count: usize,
    },
    /// The table extraction request was rejected.
    Config(ConfigError),
}

impl fmt::Display for PdfXmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfXmlError::ParseError(msg) => write!(f, "parse error: {msg}"),
            PdfXmlError::IoError(msg) => write!(f, "I/O error: {msg}"),
            PdfXmlError::PageOutOfRange { index, count } => write!(
                f,
                "page index {index} out of range (document has {count} pages)"
            ),
            PdfXmlError::Config(err) => write!(f, "invalid table configuration: {err}"),
        }
    }
}

impl std::error::Error for PdfXmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PdfXmlError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PdfXmlError {
    fn from(err: std::io::Error) -> Self {
        PdfXmlError::IoError(err.to_string())
    }
}

impl From<ConfigError> for PdfXmlError {
    fn from(err: ConfigError) -> Self {
        PdfXmlError::Config(err)
    }
}

/// Invalid table extraction configuration.
///
/// Raised when a request or column strategy is built, never during
/// extraction itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The table must have at least one column.
    ZeroColumns,
    /// The vertical band is empty (`from > to`).
    EmptyBand { from: i64, to: i64 },
    /// A range-based strategy was given no ranges.
    NoColumnRanges,
    /// A column range has `from > to`.
    InvalidRange { index: usize, from: i64, to: i64 },
    /// The column strategy produces more columns than the table has.
    TooManyColumns { classifier: usize, configured: usize },
    /// A column position widened by the variance leaves the `i64` range.
    PositionOverflow {
        index: usize,
        position: i64,
        tolerance: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroColumns => write!(f, "column count must be at least 1"),
            ConfigError::EmptyBand { from, to } => {
                write!(f, "empty vertical band: from ({from}) is greater than to ({to})")
            }
            ConfigError::NoColumnRanges => write!(f, "at least one column range is required"),
            ConfigError::InvalidRange { index, from, to } => write!(
                f,
                "column range {index} is inverted: from ({from}) is greater than to ({to})"
            ),
            ConfigError::TooManyColumns {
                classifier,
                configured,
            } => write!(
                f,
                "column strategy defines {classifier} columns but the table has {configured}"
            ),
            ConfigError::PositionOverflow {
                index,
                position,
                tolerance,
            } => write!(
                f,
                "column position {index} ({position}) with variance {tolerance} is out of range"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdfxml_error_parse_error_display() {
        let err = PdfXmlError::ParseError("unexpected root".to_string());
        assert_eq!(err.to_string(), "parse error: unexpected root");
    }

    #[test]
    fn pdfxml_error_io_from_std() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PdfXmlError = io.into();
        assert!(matches!(err, PdfXmlError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn pdfxml_error_page_out_of_range_display() {
        let err = PdfXmlError::PageOutOfRange { index: 5, count: 2 };
        assert_eq!(
            err.to_string(),
            "page index 5 out of range (document has 2 pages)"
        );
    }

    #[test]
    fn pdfxml_error_wraps_config_error() {
        let err: PdfXmlError = ConfigError::ZeroColumns.into();
        assert_eq!(
            err.to_string(),
            "invalid table configuration: column count must be at least 1"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_display_messages() {
        assert_eq!(
            ConfigError::EmptyBand { from: 10, to: 5 }.to_string(),
            "empty vertical band: from (10) is greater than to (5)"
        );
        assert_eq!(
            ConfigError::InvalidRange {
                index: 1,
                from: 30,
                to: 20
            }
            .to_string(),
            "column range 1 is inverted: from (30) is greater than to (20)"
        );
        assert_eq!(
            ConfigError::TooManyColumns {
                classifier: 3,
                configured: 2
            }
            .to_string(),
            "column strategy defines 3 columns but the table has 2"
        );
        assert_eq!(
            ConfigError::PositionOverflow {
                index: 0,
                position: i64::MIN,
                tolerance: 2
            }
            .to_string(),
            format!("column position 0 ({}) with variance 2 is out of range", i64::MIN)
        );
    }

    #[test]
    fn errors_implement_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::NoColumnRanges);
        assert_eq!(err.to_string(), "at least one column range is required");
    }
}
