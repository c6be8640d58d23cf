use crate::geometry::IntBox;

/// A positioned piece of text on a page.
///
/// Mirrors one `<text>` element of pdftohtml XML output. Coordinates are
/// integer units with the origin at the top-left of the page; larger values
/// are lower / further right.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextFragment {
    /// Distance of the top edge from the top of the page.
    pub top: i64,
    /// Distance of the left edge from the left of the page.
    pub left: i64,
    /// Horizontal extent.
    pub width: i64,
    /// Vertical extent.
    pub height: i64,
    /// Plain character content of the fragment (may be empty).
    pub text: String,
    /// Emphasized (`<b>`) content, if the fragment carried any.
    pub bold: Option<String>,
}

impl TextFragment {
    /// Create a plain fragment with no emphasized content.
    pub fn new(top: i64, left: i64, width: i64, height: i64, text: impl Into<String>) -> Self {
        Self {
            top,
            left,
            width,
            height,
            text: text.into(),
            bold: None,
        }
    }

    /// Attach emphasized content to the fragment.
    pub fn with_bold(mut self, bold: impl Into<String>) -> Self {
        self.bold = Some(bold.into());
        self
    }

    /// Bounding box of the fragment.
    pub fn bbox(&self) -> IntBox {
        IntBox::from_extent(self.left, self.top, self.width, self.height)
    }

    /// The emphasized content when present, otherwise the plain text.
    pub fn display_text(&self) -> &str {
        self.bold.as_deref().unwrap_or(&self.text)
    }
}
