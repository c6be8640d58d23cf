//! Event-driven reader for pdftohtml `-xml` output.
//!
//! Walks the `quick-xml` event stream and builds the core types: one
//! [`Page`] per `<page>`, one [`TextFragment`] per `<text>`, and the nested
//! [`Outline`] tree. Unknown elements (images, links outside text) are
//! skipped.

use std::io::BufRead;
use std::str::FromStr;

use pdfxml_core::{
    FontSpec, Outline, OutlineItem, Page, TextFragment, UnicodeNorm, normalize_fragment,
};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;

/// A parsed pdf2xml document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XmlDocument {
    /// `producer` attribute of the root element (e.g. "poppler").
    pub producer: Option<String>,
    /// `version` attribute of the root element.
    pub version: Option<String>,
    /// Pages in document order.
    pub pages: Vec<Page>,
    /// Top-level outlines in document order.
    pub outlines: Vec<Outline>,
}

/// Options controlling how text content is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Normalization applied to every fragment's text (default: none).
    pub unicode_norm: UnicodeNorm,
}

/// Parse a pdf2xml document held in memory.
pub fn parse_document(xml: &str) -> Result<XmlDocument, XmlError> {
    parse_document_with_options(xml, &ParseOptions::default())
}

/// Parse a pdf2xml document held in memory with explicit options.
pub fn parse_document_with_options(
    xml: &str,
    options: &ParseOptions,
) -> Result<XmlDocument, XmlError> {
    parse_reader(xml.as_bytes(), options)
}

/// Parse a pdf2xml document from any buffered reader.
///
/// # Errors
///
/// Returns [`XmlError`] for malformed XML, a root element other than
/// `<pdf2xml>`, truncated input, or `<text>` elements with missing or
/// non-integer coordinates.
pub fn parse_reader<R: BufRead>(input: R, options: &ParseOptions) -> Result<XmlDocument, XmlError> {
    let mut reader = Reader::from_reader(input);
    reader.expand_empty_elements(true);

    let mut walker = Walker {
        reader,
        buf: Vec::new(),
        options: *options,
    };
    walker.document()
}

struct Walker<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    options: ParseOptions,
}

impl<R: BufRead> Walker<R> {
    fn next(&mut self) -> Result<Event<'static>, XmlError> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?;
        Ok(event.into_owned())
    }

    fn document(&mut self) -> Result<XmlDocument, XmlError> {
        loop {
            match self.next()? {
                Event::Start(root) => {
                    let name = element_name(&root);
                    if name != "pdf2xml" {
                        return Err(XmlError::UnexpectedRoot(name));
                    }
                    let mut doc = XmlDocument {
                        producer: attribute(&root, "producer")?,
                        version: attribute(&root, "version")?,
                        ..XmlDocument::default()
                    };
                    self.document_body(&mut doc)?;

                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        pages = doc.pages.len(),
                        outlines = doc.outlines.len(),
                        "parsed pdf2xml document"
                    );
                    return Ok(doc);
                }
                Event::Eof => return Err(XmlError::MissingRoot),
                // XML declaration, doctype, comments, whitespace
                _ => {}
            }
        }
    }

    fn document_body(&mut self, doc: &mut XmlDocument) -> Result<(), XmlError> {
        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"page" => {
                        let page = self.page(&e)?;
                        doc.pages.push(page);
                    }
                    b"outline" => {
                        let outline = self.outline()?;
                        doc.outlines.push(outline);
                    }
                    _ => self.skip(&e)?,
                },
                Event::End(_) => return Ok(()),
                Event::Eof => return Err(XmlError::UnexpectedEof("pdf2xml".to_string())),
                _ => {}
            }
        }
    }

    fn page(&mut self, start: &BytesStart<'_>) -> Result<Page, XmlError> {
        let mut page = Page {
            number: number_attribute(start, "page", "number")?,
            position: attribute(start, "position")?,
            top: number_attribute(start, "page", "top")?,
            left: number_attribute(start, "page", "left")?,
            width: number_attribute(start, "page", "width")?,
            height: number_attribute(start, "page", "height")?,
            ..Page::default()
        };

        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"fontspec" => {
                        page.font_specs.push(font_spec(&e)?);
                        self.skip(&e)?;
                    }
                    b"text" => {
                        let fragment = self.text(&e)?;
                        page.texts.push(fragment);
                    }
                    _ => self.skip(&e)?,
                },
                Event::End(_) => return Ok(page),
                Event::Eof => return Err(XmlError::UnexpectedEof("page".to_string())),
                _ => {}
            }
        }
    }

    /// Read a `<text>` element. Content inside `<b>` (at any depth) becomes
    /// the bold variant; everything else, including `<i>` and `<a>` content,
    /// is appended to the plain text.
    fn text(&mut self, start: &BytesStart<'_>) -> Result<TextFragment, XmlError> {
        let mut fragment = TextFragment::new(
            required_number(start, "text", "top")?,
            required_number(start, "text", "left")?,
            required_number(start, "text", "width")?,
            required_number(start, "text", "height")?,
            String::new(),
        );

        let mut depth = 0usize;
        let mut bold_depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(e) => {
                    depth += 1;
                    if bold_depth > 0 || e.name().as_ref() == b"b" {
                        bold_depth += 1;
                        fragment.bold.get_or_insert_with(String::new);
                    }
                }
                Event::End(_) => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    bold_depth = bold_depth.saturating_sub(1);
                }
                Event::Text(t) => {
                    let content = t.unescape()?;
                    append_content(&mut fragment, &content, bold_depth > 0);
                }
                Event::CData(c) => {
                    let raw = c.into_inner();
                    let content = String::from_utf8_lossy(&raw);
                    append_content(&mut fragment, &content, bold_depth > 0);
                }
                Event::Eof => return Err(XmlError::UnexpectedEof("text".to_string())),
                _ => {}
            }
        }

        normalize_fragment(&mut fragment, self.options.unicode_norm);
        Ok(fragment)
    }

    fn outline(&mut self) -> Result<Outline, XmlError> {
        let mut outline = Outline::default();
        loop {
            match self.next()? {
                Event::Start(e) => match e.name().as_ref() {
                    b"item" => {
                        let page = number_attribute(&e, "item", "page")?;
                        let title = self.inner_text("item")?;
                        outline.items.push(OutlineItem {
                            page,
                            title: self.options.unicode_norm.normalize(&title),
                        });
                    }
                    b"outline" => {
                        let child = self.outline()?;
                        outline.outlines.push(child);
                    }
                    _ => self.skip(&e)?,
                },
                Event::End(_) => return Ok(outline),
                Event::Eof => return Err(XmlError::UnexpectedEof("outline".to_string())),
                _ => {}
            }
        }
    }

    /// Concatenate all character data up to the end of the current element.
    fn inner_text(&mut self, element: &str) -> Result<String, XmlError> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(text);
                    }
                    depth -= 1;
                }
                Event::Text(t) => text.push_str(&t.unescape()?),
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
                Event::Eof => return Err(XmlError::UnexpectedEof(element.to_string())),
                _ => {}
            }
        }
    }

    /// Consume events up to and including the end of `start`'s element.
    fn skip(&mut self, start: &BytesStart<'_>) -> Result<(), XmlError> {
        let name = element_name(start);
        #[cfg(feature = "tracing")]
        if name != "fontspec" {
            tracing::debug!(element = %name, "skipping element");
        }

        let mut depth = 0usize;
        loop {
            match self.next()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Eof => return Err(XmlError::UnexpectedEof(name)),
                _ => {}
            }
        }
    }
}

fn append_content(fragment: &mut TextFragment, content: &str, bold: bool) {
    if bold {
        fragment
            .bold
            .get_or_insert_with(String::new)
            .push_str(content);
    } else {
        fragment.text.push_str(content);
    }
}

fn font_spec(start: &BytesStart<'_>) -> Result<FontSpec, XmlError> {
    Ok(FontSpec {
        id: number_attribute(start, "fontspec", "id")?,
        size: number_attribute(start, "fontspec", "size")?,
        family: attribute(start, "family")?,
        color: attribute(start, "color")?,
    })
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

/// Unescaped value of attribute `key`, if present.
fn attribute(start: &BytesStart<'_>, key: &str) -> Result<Option<String>, XmlError> {
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn number_attribute<T: FromStr>(
    start: &BytesStart<'_>,
    element: &'static str,
    key: &'static str,
) -> Result<Option<T>, XmlError> {
    let Some(value) = attribute(start, key)? else {
        return Ok(None);
    };
    match value.trim().parse::<T>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(XmlError::InvalidAttribute {
            element,
            attribute: key,
            value,
        }),
    }
}

fn required_number(
    start: &BytesStart<'_>,
    element: &'static str,
    key: &'static str,
) -> Result<i64, XmlError> {
    number_attribute(start, element, key)?.ok_or(XmlError::MissingAttribute {
        element,
        attribute: key,
    })
}
