//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use pdfxml::{Document, ParseOptions, TableExtractionRequest, TableSettings, range_classifier};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn open_statement() -> Document {
    Document::open_file(fixture("statement.xml"), &ParseOptions::default()).unwrap()
}

/// Settings matching the statement fixture: three columns between the page
/// header and the footer, two units of line tolerance.
pub fn statement_settings() -> TableSettings {
    TableSettings {
        from: 170,
        to: 1000,
        columns: 3,
        tolerance: 2,
    }
}

pub fn statement_request() -> TableExtractionRequest {
    let classifier = range_classifier(&[(70, 150), (190, 400), (460, 520)]).unwrap();
    TableExtractionRequest::new(statement_settings(), classifier).unwrap()
}
