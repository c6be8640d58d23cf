//! pdfxml-parse: reader for pdftohtml `-xml` documents.
//!
//! This crate turns the XML that `pdftohtml -xml` writes into the
//! backend-independent types of pdfxml-core: pages with positioned text
//! fragments, font specs, and the document outline.

pub mod error;
pub mod reader;

pub use error::XmlError;
pub use pdfxml_core;
pub use reader::{
    ParseOptions, XmlDocument, parse_document, parse_document_with_options, parse_reader,
};
