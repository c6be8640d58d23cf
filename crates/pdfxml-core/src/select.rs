//! Band filtering and reading-order sorting of text fragments.

use crate::text::TextFragment;

/// Select the fragments whose `top` lies within `from..=to` and return them in
/// reading order: top-to-bottom, then left-to-right.
///
/// The sort is stable, so fragments sharing both `top` and `left` keep their
/// original relative order. The input is not modified.
pub fn select_fragments(fragments: &[TextFragment], from: i64, to: i64) -> Vec<&TextFragment> {
    let mut selected: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| f.top >= from && f.top <= to)
        .collect();

    selected.sort_by_key(|f| (f.top, f.left));
    selected
}
