//! Substring containment and prefix checks.

use crate::classify;

/// Case-sensitive substring search. False if either argument is blank.
pub fn contains(text: &str, substring: &str) -> bool {
    if classify::is_blank(text) || classify::is_blank(substring) {
        return false;
    }

    text.contains(substring)
}

/// Case-insensitive substring search (ASCII case folding). False if either
/// argument is blank.
pub fn contains_no_case(text: &str, substring: &str) -> bool {
    if classify::is_blank(text) || classify::is_blank(substring) {
        return false;
    }

    text.to_ascii_lowercase()
        .contains(&substring.to_ascii_lowercase())
}

/// True iff `text` begins with `prefix`, case-sensitive.
///
/// A prefix longer than the text is false; an empty prefix matches.
pub fn starts_with(text: &str, prefix: &str) -> bool {
    text.as_bytes().starts_with(prefix.as_bytes())
}
