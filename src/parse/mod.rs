//! Numeric coercion of text values.
//!
//! Two flavours exist. [`leading_float`] reads the longest numeral at the
//! start of the text and ignores whatever follows (`"12px"` is `12`), which is
//! how cell values are coerced for ordering operators. [`full_numeral`]
//! requires the whole trimmed text to be a numeral and treats blank text as
//! zero; loose equality uses it to compare strings against numbers.

mod numeral;

use winnow::Parser;

/// Parse the numeral at the start of `text`, skipping leading whitespace.
///
/// Returns `None` when no digits are found or the result is NaN.
pub(crate) fn leading_float(text: &str) -> Option<f64> {
    let mut input = text.trim_start();
    let literal = numeral::numeral.parse_next(&mut input).ok()?;
    literal.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Convert the whole of `text` to a number.
pub(crate) fn full_numeral(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    let literal = numeral::numeral.parse(trimmed).ok()?;
    literal.parse::<f64>().ok()
}
