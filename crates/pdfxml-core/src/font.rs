//! Font declared by a page (`<fontspec>`).

/// A `<fontspec>` declaration from pdftohtml XML output.
///
/// Carried alongside the page's text fragments so callers can inspect it;
/// table extraction never consults it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSpec {
    /// Identifier referenced by `<text font="...">`.
    pub id: Option<i64>,
    /// Font size in points.
    pub size: Option<i64>,
    /// Font family name (e.g. "Times").
    pub family: Option<String>,
    /// Text color as written in the XML (e.g. "#000000").
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fontspec_default_is_empty() {
        let spec = FontSpec::default();
        assert!(spec.id.is_none());
        assert!(spec.size.is_none());
        assert!(spec.family.is_none());
        assert!(spec.color.is_none());
    }
}
