//! pdfxml: Extract positioned text and tables from pdftohtml `-xml` output.
//!
//! This is the public API facade crate for pdfxml-rs. It re-exports types from
//! pdfxml-core and uses pdfxml-parse for reading pdf2xml documents.
//!
//! # Architecture
//!
//! - **pdfxml-core**: Backend-independent data types and the table engine
//! - **pdfxml-parse**: pdf2xml reader built on `quick-xml`
//! - **pdfxml** (this crate): Public API that ties everything together

mod document;

pub use document::{Document, PageTable};
pub use pdfxml_core;
pub use pdfxml_core::{
    AllOf, Bookmark, CellContent, ColumnClassifier, ColumnMatches, ColumnRange, ConfigError,
    EntryBounds, FontSpec, IntBox, MinFilledCells, Outline, OutlineItem, Page, PdfXmlError,
    RangeClassifier, RequiredColumns, RowValidator, TableEntry, TableExtractionRequest,
    TableSettings, TextFragment, UnicodeNorm, extract_table, range_classifier,
    variance_classifier,
};
pub use pdfxml_parse;
pub use pdfxml_parse::{ParseOptions, XmlError};
