//! Per-domain comparison of a decoded value against a sarg literal.
//!
//! Both comparators order `observed` against `literal` and let the operator
//! test the resulting ordering, so `GreaterThan` means "the column value is
//! greater than the literal" in every domain.

use crate::{like::WildcardMatcher, sarg::SargOp};

/// Upper bound, in bytes, on text taking part in ordinal comparison.
///
/// Stored text values were historically copied into a 256 byte buffer with a
/// trailing NUL; literals and values are both cut to this length, so a
/// literal differing from a value only past this point compares equal.
pub const TEXT_COMPARE_LIMIT: usize = 255;

/// Compares integers; `None` when `op` has no integer meaning.
#[must_use]
pub fn compare_int(op: SargOp, literal: i32, observed: i32) -> Option<bool> {
    op.test_ordering(observed.cmp(&literal))
}

/// Compares narrow text.
///
/// `Like` returns the matcher's verdict unchanged. Other operators compare
/// bytes ordinally, each side bounded by its first NUL and by
/// [`TEXT_COMPARE_LIMIT`].
#[must_use]
pub fn compare_text(
    op: SargOp,
    literal: &[u8],
    observed: &[u8],
    matcher: &dyn WildcardMatcher,
) -> Option<bool> {
    if op == SargOp::Like {
        return Some(matcher.matches(literal, observed));
    }
    op.test_ordering(bounded(observed).cmp(bounded(literal)))
}

/// Cuts `text` at its first NUL and at [`TEXT_COMPARE_LIMIT`] bytes.
pub(crate) fn bounded(text: &[u8]) -> &[u8] {
    let text = &text[..text.len().min(TEXT_COMPARE_LIMIT)];
    match text.iter().position(|&byte| byte == 0) {
        Some(nul) => &text[..nul],
        None => text,
    }
}
