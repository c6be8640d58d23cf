//! pdfxml-core: Backend-independent data types and algorithms.
//!
//! This crate provides the positioned text model (pages, text fragments, font
//! specs, outlines) and the table extraction engine used by pdfxml-rs. It
//! knows nothing about XML; `pdfxml-parse` builds these types from pdftohtml
//! output.

pub mod column;
pub mod error;
pub mod font;
pub mod geometry;
pub mod outline;
pub mod page;
pub mod select;
pub mod table;
pub mod text;
pub mod unicode_norm;
pub mod validator;

pub use column::{
    ColumnClassifier, ColumnRange, RangeClassifier, range_classifier, variance_classifier,
};
pub use error::{ConfigError, PdfXmlError};
pub use font::FontSpec;
pub use geometry::IntBox;
pub use outline::{Bookmark, Outline, OutlineItem, flatten_outlines};
pub use page::Page;
pub use select::select_fragments;
pub use table::{
    CellContent, EntryBounds, TableEntry, TableExtractionRequest, TableSettings, extract_table,
    group_rows,
};
pub use text::TextFragment;
pub use unicode_norm::{UnicodeNorm, normalize_fragment, normalize_fragments};
pub use validator::{AllOf, ColumnMatches, MinFilledCells, RequiredColumns, RowValidator};
