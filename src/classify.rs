//! Byte-wise ASCII classification predicates.
//!
//! Every predicate here treats an empty string and a missing value the same
//! way: blank in, `false` out (except `is_blank` itself). Classification is
//! strictly ASCII; multi-byte input fails the predicates byte by byte.

use crate::trim;

/// True if the value is empty or reduces to empty after trimming
/// ASCII whitespace.
///
/// Nearly every other operation in this crate uses this as its guard, so
/// callers get identical behavior for "no value" and "only spaces".
pub fn is_blank(text: &str) -> bool {
    trim::trim(text).is_empty()
}

/// True iff the value is non-blank and every byte is an ASCII digit.
///
/// No sign, no decimal point, no exponent.
pub fn is_numeric(text: &str) -> bool {
    if is_blank(text) {
        return false;
    }

    text.bytes().all(|b| b.is_ascii_digit())
}

/// True iff the value is non-blank and every byte is an ASCII letter or
/// digit. Spaces and special characters anywhere make it false.
pub fn is_alphanumeric(text: &str) -> bool {
    if is_blank(text) {
        return false;
    }

    text.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// True iff the trimmed value consists only of ASCII uppercase letters.
///
/// Blank input is false. NUL bytes are skipped rather than failed; any
/// other non-uppercase byte (digits and punctuation included) is a
/// failure.
pub fn is_uppercase(text: &str) -> bool {
    if is_blank(text) {
        return false;
    }

    trim::trim(text)
        .bytes()
        .filter(|&b| b != 0)
        .all(|b| b.is_ascii_uppercase())
}

/// Byte-wise string equality, case-sensitive. Two empty strings are equal.
pub fn equals(a: &str, b: &str) -> bool {
    a == b
}

/// Byte-wise string equality, ignoring ASCII case.
pub fn equals_no_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
