//! A single page of a pdf2xml document.

use crate::font::FontSpec;
use crate::geometry::IntBox;
use crate::select::select_fragments;
use crate::table::{TableEntry, TableExtractionRequest, extract_table};
use crate::text::TextFragment;

/// One `<page>` element: its attributes, declared fonts, and text fragments.
///
/// Page attributes are optional because pdftohtml omits them in some modes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    /// 1-indexed page number.
    pub number: Option<u32>,
    /// Position mode (typically "absolute").
    pub position: Option<String>,
    pub top: Option<i64>,
    pub left: Option<i64>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Fonts declared on this page.
    pub font_specs: Vec<FontSpec>,
    /// Text fragments in document order.
    pub texts: Vec<TextFragment>,
}

impl Page {
    /// Bounding box of the page, when all four attributes are present.
    pub fn bbox(&self) -> Option<IntBox> {
        Some(IntBox::from_extent(
            self.left?,
            self.top?,
            self.width?,
            self.height?,
        ))
    }

    /// Smallest box covering every text fragment, or `None` for a page
    /// without text.
    pub fn text_extent(&self) -> Option<IntBox> {
        self.texts
            .iter()
            .map(TextFragment::bbox)
            .reduce(|acc, b| acc.union(&b))
    }

    /// Fragments whose top lies in `from..=to`, in reading order.
    pub fn select(&self, from: i64, to: i64) -> Vec<&TextFragment> {
        select_fragments(&self.texts, from, to)
    }

    /// Extract table rows from this page's fragments.
    pub fn extract_table(&self, request: &TableExtractionRequest) -> Vec<TableEntry> {
        extract_table(&self.texts, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_requires_all_attributes() {
        let mut page = Page {
            top: Some(0),
            left: Some(0),
            width: Some(892),
            height: Some(1263),
            ..Page::default()
        };
        assert_eq!(page.bbox(), Some(IntBox::new(0, 0, 892, 1263)));

        page.height = None;
        assert!(page.bbox().is_none());
    }

    #[test]
    fn text_extent_covers_all_fragments() {
        let page = Page {
            texts: vec![
                TextFragment::new(100, 80, 60, 15, "a"),
                TextFragment::new(40, 300, 20, 10, "b"),
            ],
            ..Page::default()
        };
        assert_eq!(page.text_extent(), Some(IntBox::new(80, 40, 320, 115)));
        assert!(Page::default().text_extent().is_none());
    }

    #[test]
    fn select_delegates_to_band_filter() {
        let page = Page {
            texts: vec![
                TextFragment::new(50, 10, 5, 5, "b"),
                TextFragment::new(10, 10, 5, 5, "a"),
                TextFragment::new(500, 10, 5, 5, "out"),
            ],
            ..Page::default()
        };
        let texts: Vec<&str> = page
            .select(0, 100)
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
