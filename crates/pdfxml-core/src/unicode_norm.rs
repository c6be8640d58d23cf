//! Unicode normalization of fragment text.
//!
//! pdftohtml passes through whatever code points the PDF carried, so the same
//! visible cell text can arrive composed, decomposed, or as ligatures.
//! [`UnicodeNorm`] selects a normalization form; [`normalize_fragment`]
//! applies it to both the plain and the emphasized content of a fragment.

use unicode_normalization::UnicodeNormalization;

use crate::text::TextFragment;

/// Unicode normalization form to apply to fragment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeNorm {
    /// Leave text as parsed (default).
    #[default]
    None,
    /// Canonical composition (NFC).
    Nfc,
    /// Canonical decomposition (NFD).
    Nfd,
    /// Compatibility composition (NFKC); folds ligatures and full-width forms.
    Nfkc,
    /// Compatibility decomposition (NFKD).
    Nfkd,
}

impl UnicodeNorm {
    /// Apply this normalization form to `text`.
    pub fn normalize(&self, text: &str) -> String {
        match self {
            UnicodeNorm::None => text.to_string(),
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }
}

/// Normalize a fragment's plain and emphasized text in place.
///
/// Coordinates are left untouched.
pub fn normalize_fragment(fragment: &mut TextFragment, norm: UnicodeNorm) {
    if norm == UnicodeNorm::None {
        return;
    }
    fragment.text = norm.normalize(&fragment.text);
    if let Some(bold) = fragment.bold.as_mut() {
        *bold = norm.normalize(bold);
    }
}

/// Return normalized copies of `fragments`.
pub fn normalize_fragments(fragments: &[TextFragment], norm: UnicodeNorm) -> Vec<TextFragment> {
    fragments
        .iter()
        .cloned()
        .map(|mut f| {
            normalize_fragment(&mut f, norm);
            f
        })
        .collect()
}
