//! Document outline / bookmark types.
//!
//! Provides [`Outline`] for the nested `<outline>` tree emitted by pdftohtml
//! and [`Bookmark`] for its flattened, depth-annotated form.

/// A single `<item>` of an outline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineItem {
    /// 1-indexed destination page, if the item carried one.
    pub page: Option<u32>,
    /// The item title text.
    pub title: String,
}

/// One level of the outline tree: its own items plus nested sub-outlines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    pub items: Vec<OutlineItem>,
    pub outlines: Vec<Outline>,
}

/// A flattened outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bookmark {
    /// The bookmark title text.
    pub title: String,
    /// Nesting depth (0-indexed). Top-level bookmarks have level 0.
    pub level: usize,
    /// The 1-indexed destination page number, if present.
    pub page_number: Option<u32>,
}

impl Outline {
    /// Flatten this outline into bookmarks, items before nested outlines.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        let mut out = Vec::new();
        self.collect(0, &mut out);
        out
    }

    fn collect(&self, level: usize, out: &mut Vec<Bookmark>) {
        for item in &self.items {
            out.push(Bookmark {
                title: item.title.clone(),
                level,
                page_number: item.page,
            });
        }
        for child in &self.outlines {
            child.collect(level + 1, out);
        }
    }
}

/// Flatten a list of top-level outlines in document order.
pub fn flatten_outlines(outlines: &[Outline]) -> Vec<Bookmark> {
    outlines.iter().flat_map(Outline::bookmarks).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, page: Option<u32>) -> OutlineItem {
        OutlineItem {
            title: title.to_string(),
            page,
        }
    }

    #[test]
    fn empty_outline_has_no_bookmarks() {
        assert!(Outline::default().bookmarks().is_empty());
    }

    #[test]
    fn nested_outline_levels() {
        let outline = Outline {
            items: vec![item("Chapter 1", Some(1)), item("Chapter 2", Some(10))],
            outlines: vec![Outline {
                items: vec![item("Section 2.1", Some(11))],
                outlines: vec![Outline {
                    items: vec![item("Section 2.1.1", None)],
                    outlines: vec![],
                }],
            }],
        };

        let bookmarks = outline.bookmarks();
        assert_eq!(bookmarks.len(), 4);
        assert_eq!(bookmarks[0].title, "Chapter 1");
        assert_eq!(bookmarks[0].level, 0);
        assert_eq!(bookmarks[1].page_number, Some(10));
        assert_eq!(bookmarks[2].title, "Section 2.1");
        assert_eq!(bookmarks[2].level, 1);
        assert_eq!(bookmarks[3].level, 2);
        assert!(bookmarks[3].page_number.is_none());
    }

    #[test]
    fn flatten_multiple_outlines_keeps_order() {
        let outlines = vec![
            Outline {
                items: vec![item("A", Some(1))],
                outlines: vec![],
            },
            Outline {
                items: vec![item("B", Some(2))],
                outlines: vec![],
            },
        ];
        let titles: Vec<String> = flatten_outlines(&outlines)
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }
}
