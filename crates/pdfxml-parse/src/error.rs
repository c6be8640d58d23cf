//! Error types for the pdf2xml reader.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`XmlError`]
//! that wraps `quick-xml` and I/O errors and converts them to [`PdfXmlError`].

use pdfxml_core::PdfXmlError;
use thiserror::Error;

/// Error type for reading pdf2xml documents.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Malformed XML (syntax, escaping, attribute quoting).
    #[error("XML syntax error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Error reading the XML data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contains no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The root element is not `<pdf2xml>`.
    #[error("expected <pdf2xml> root element, found <{0}>")]
    UnexpectedRoot(String),

    /// The input ended before an element was closed.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// A required attribute is absent.
    #[error("missing attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute value could not be parsed.
    #[error("invalid value '{value}' for attribute '{attribute}' on <{element}>")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

impl From<XmlError> for PdfXmlError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::Io(e) => PdfXmlError::IoError(e.to_string()),
            other => PdfXmlError::ParseError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_error_unexpected_root() {
        let err = XmlError::UnexpectedRoot("html".to_string());
        assert_eq!(
            err.to_string(),
            "expected <pdf2xml> root element, found <html>"
        );
    }

    #[test]
    fn xml_error_io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: XmlError = io_err.into();
        assert!(matches!(err, XmlError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn xml_error_attribute_messages() {
        let missing = XmlError::MissingAttribute {
            element: "text",
            attribute: "top",
        };
        assert_eq!(missing.to_string(), "missing attribute 'top' on <text>");

        let invalid = XmlError::InvalidAttribute {
            element: "page",
            attribute: "width",
            value: "wide".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "invalid value 'wide' for attribute 'width' on <page>"
        );
    }

    #[test]
    fn xml_error_to_pdfxml_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let pdf_err: PdfXmlError = XmlError::Io(io_err).into();
        assert!(matches!(pdf_err, PdfXmlError::IoError(_)));
        assert!(pdf_err.to_string().contains("denied"));
    }

    #[test]
    fn xml_error_to_pdfxml_error_parse() {
        let pdf_err: PdfXmlError = XmlError::UnexpectedEof("page".to_string()).into();
        assert_eq!(
            pdf_err,
            PdfXmlError::ParseError("unexpected end of document inside <page>".to_string())
        );
    }

    #[test]
    fn xml_error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(XmlError::MissingRoot);
        assert_eq!(err.to_string(), "document has no root element");
    }
}
