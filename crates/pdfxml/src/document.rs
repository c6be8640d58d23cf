//! Top-level document type for opening pdf2xml files and extracting tables.

use pdfxml_core::{
    Bookmark, Page, PdfXmlError, TableEntry, TableExtractionRequest, flatten_outlines,
};
use pdfxml_parse::{ParseOptions, XmlDocument, parse_document_with_options};

/// A pdf2xml document opened for extraction.
///
/// Holds the parsed pages and the flattened outline.
///
/// # Example
///
/// ```ignore
/// let doc = Document::open(&xml)?;
/// let request = TableExtractionRequest::new(settings, range_classifier(&[(0, 100)])?)?;
/// let rows = doc.page(0)?.extract_table(&request);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    inner: XmlDocument,
    /// Cached flattened outline.
    bookmarks: Vec<Bookmark>,
}

/// Rows extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageTable {
    /// 0-based index of the page in the document.
    pub index: usize,
    /// The page's `number` attribute, when present.
    pub page_number: Option<u32>,
    pub rows: Vec<TableEntry>,
}

impl Document {
    /// Open a document from pdf2xml text with default options.
    ///
    /// # Errors
    ///
    /// Returns [`PdfXmlError::ParseError`] if the text is not a well-formed
    /// pdf2xml document.
    pub fn open(xml: &str) -> Result<Self, PdfXmlError> {
        Self::open_with_options(xml, &ParseOptions::default())
    }

    /// Open a document from pdf2xml text.
    ///
    /// # Errors
    ///
    /// Returns [`PdfXmlError::ParseError`] if the text is not a well-formed
    /// pdf2xml document.
    pub fn open_with_options(xml: &str, options: &ParseOptions) -> Result<Self, PdfXmlError> {
        let inner = parse_document_with_options(xml, options)?;
        Ok(Self::from_parsed(inner))
    }

    /// Open a pdf2xml file from disk.
    ///
    /// Convenience wrapper that reads the file and calls
    /// [`Document::open_with_options`].
    ///
    /// # Errors
    ///
    /// Returns [`PdfXmlError::IoError`] if the file cannot be read, or
    /// [`PdfXmlError::ParseError`] if its contents are not valid pdf2xml.
    #[cfg(feature = "std")]
    pub fn open_file(
        path: impl AsRef<std::path::Path>,
        options: &ParseOptions,
    ) -> Result<Self, PdfXmlError> {
        let xml = std::fs::read_to_string(path)?;
        Self::open_with_options(&xml, options)
    }

    /// Wrap an already parsed document.
    pub fn from_parsed(inner: XmlDocument) -> Self {
        let bookmarks = flatten_outlines(&inner.outlines);
        Self { inner, bookmarks }
    }

    /// Return the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.inner.pages.len()
    }

    /// Access a page by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`PdfXmlError::PageOutOfRange`] if `index >= page_count()`.
    pub fn page(&self, index: usize) -> Result<&Page, PdfXmlError> {
        self.inner
            .pages
            .get(index)
            .ok_or(PdfXmlError::PageOutOfRange {
                index,
                count: self.page_count(),
            })
    }

    /// All pages in document order.
    pub fn pages(&self) -> &[Page] {
        &self.inner.pages
    }

    /// Return the document bookmarks (flattened outline).
    ///
    /// Each bookmark's `level` indicates nesting depth. Empty if the
    /// document has no outline.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// The `producer` attribute of the root element.
    pub fn producer(&self) -> Option<&str> {
        self.inner.producer.as_deref()
    }

    /// The `version` attribute of the root element.
    pub fn version(&self) -> Option<&str> {
        self.inner.version.as_deref()
    }

    /// Extract table rows from every page, in page order.
    pub fn extract_tables(&self, request: &TableExtractionRequest) -> Vec<PageTable> {
        self.inner
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| page_table(index, page, request))
            .collect()
    }

    /// Extract table rows from the pages at the given 0-based indices.
    ///
    /// # Errors
    ///
    /// Returns [`PdfXmlError::PageOutOfRange`] for the first invalid index.
    pub fn extract_tables_from(
        &self,
        indices: &[usize],
        request: &TableExtractionRequest,
    ) -> Result<Vec<PageTable>, PdfXmlError> {
        indices
            .iter()
            .map(|&index| Ok(page_table(index, self.page(index)?, request)))
            .collect()
    }

    /// Extract table rows from all pages in parallel using rayon.
    ///
    /// Pages are independent, so each is grouped on its own worker. The
    /// returned Vec is ordered by page index, identical to
    /// [`Document::extract_tables`].
    #[cfg(feature = "parallel")]
    pub fn extract_tables_parallel(&self, request: &TableExtractionRequest) -> Vec<PageTable> {
        use rayon::prelude::*;

        self.inner
            .pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| page_table(index, page, request))
            .collect()
    }
}

fn page_table(index: usize, page: &Page, request: &TableExtractionRequest) -> PageTable {
    PageTable {
        index,
        page_number: page.number,
        rows: page.extract_table(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfxml_core::{TableSettings, UnicodeNorm, range_classifier};

    const TWO_PAGES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<pdf2xml producer="poppler" version="23.08.0">
<page number="1" position="absolute" top="0" left="0" height="800" width="600">
<text top="100" left="10" width="40" height="12">a</text>
<text top="100" left="110" width="40" height="12">b</text>
<text top="130" left="10" width="40" height="12">c</text>
</page>
<page number="2" position="absolute" top="0" left="0" height="800" width="600">
<text top="50" left="110" width="40" height="12">d</text>
</page>
<outline>
<item page="1">First</item>
<outline><item page="2">Nested</item></outline>
</outline>
</pdf2xml>
"#;

    fn request() -> TableExtractionRequest {
        let settings = TableSettings {
            columns: 2,
            ..TableSettings::default()
        };
        TableExtractionRequest::new(settings, range_classifier(&[(0, 50), (100, 150)]).unwrap())
            .unwrap()
    }

    #[test]
    fn open_reads_metadata_and_pages() {
        let doc = Document::open(TWO_PAGES).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.producer(), Some("poppler"));
        assert_eq!(doc.version(), Some("23.08.0"));
        assert_eq!(doc.pages()[1].texts[0].text, "d");
    }

    #[test]
    fn page_out_of_range() {
        let doc = Document::open(TWO_PAGES).unwrap();
        assert!(doc.page(1).is_ok());
        assert_eq!(
            doc.page(2).unwrap_err(),
            PdfXmlError::PageOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn bookmarks_are_flattened() {
        let doc = Document::open(TWO_PAGES).unwrap();
        let titles: Vec<_> = doc
            .bookmarks()
            .iter()
            .map(|b| (b.title.as_str(), b.level))
            .collect();
        assert_eq!(titles, vec![("First", 0), ("Nested", 1)]);
    }

    #[test]
    fn open_rejects_invalid_xml() {
        let err = Document::open("<html/>").unwrap_err();
        assert!(matches!(err, PdfXmlError::ParseError(_)));
    }

    #[test]
    fn extract_tables_per_page() {
        let doc = Document::open(TWO_PAGES).unwrap();
        let tables = doc.extract_tables(&request());
        assert_eq!(tables.len(), 2);

        assert_eq!(tables[0].index, 0);
        assert_eq!(tables[0].page_number, Some(1));
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].rows[0].texts(), vec![Some("a"), Some("b")]);
        assert_eq!(tables[0].rows[1].texts(), vec![Some("c"), None]);

        assert_eq!(tables[1].rows.len(), 1);
        assert_eq!(tables[1].rows[0].texts(), vec![None, Some("d")]);
    }

    #[test]
    fn extract_tables_from_selected_pages() {
        let doc = Document::open(TWO_PAGES).unwrap();
        let tables = doc.extract_tables_from(&[1], &request()).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].index, 1);

        let err = doc.extract_tables_from(&[0, 5], &request()).unwrap_err();
        assert_eq!(err, PdfXmlError::PageOutOfRange { index: 5, count: 2 });
    }

    #[test]
    fn open_with_options_normalizes() {
        let xml = "<pdf2xml><page><text top=\"1\" left=\"1\" width=\"1\" height=\"1\">\u{FB01}</text></page></pdf2xml>";
        let options = ParseOptions {
            unicode_norm: UnicodeNorm::Nfkc,
        };
        let doc = Document::open_with_options(xml, &options).unwrap();
        assert_eq!(doc.pages()[0].texts[0].text, "fi");
    }

    #[cfg(feature = "std")]
    #[test]
    fn open_file_missing_is_io_error() {
        let err = Document::open_file("/nonexistent/doc.xml", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, PdfXmlError::IoError(_)));
    }

    #[cfg(feature = "parallel")]
    mod parallel_tests {
        use super::*;

        #[test]
        fn extract_tables_parallel_matches_sequential() {
            let doc = Document::open(TWO_PAGES).unwrap();
            let req = request();
            assert_eq!(doc.extract_tables_parallel(&req), doc.extract_tables(&req));
        }
    }
}
