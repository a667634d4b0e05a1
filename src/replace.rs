//! Non-overlapping occurrence counting and substitution.
//!
//! Both operations scan left to right and advance past the full matched
//! length after each hit, so `"aaa"` searched for `"aa"` counts once.
//! The guards here are strict empty checks, not blank checks: a string of
//! only whitespace is a valid, searchable haystack.

/// Count non-overlapping occurrences of `needle` in `text`.
///
/// Returns 0 if either argument is empty.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if text.is_empty() || needle.is_empty() {
        return 0;
    }

    text.matches(needle).count()
}

/// Replace every non-overlapping occurrence of `needle` with
/// `replacement`, leaving non-matching bytes untouched.
///
/// Returns `None` (result left unset) when `text` or `needle` is empty.
/// An empty `replacement` deletes every occurrence. The output grows
/// dynamically rather than being sized up front.
pub fn replace(text: &str, needle: &str, replacement: &str) -> Option<String> {
    if text.is_empty() || needle.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(needle) {
        result.push_str(&rest[..pos]);
        result.push_str(replacement);
        rest = &rest[pos + needle.len()..];
    }

    result.push_str(rest);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
    }

    #[test]
    fn count_simple() {
        assert_eq!(count_occurrences("banana", "an"), 2);
        assert_eq!(count_occurrences("banana", "x"), 0);
    }

    #[test]
    fn count_empty_arguments_are_zero() {
        assert_eq!(count_occurrences("", "a"), 0);
        assert_eq!(count_occurrences("a", ""), 0);
    }

    #[test]
    fn count_whitespace_haystack_is_searchable() {
        // Strict empty check: blank but non-empty text still counts.
        assert_eq!(count_occurrences("   ", " "), 3);
    }

    #[test]
    fn replace_pins() {
        assert_eq!(replace("banana", "an", "X").as_deref(), Some("bXXa"));
    }

    #[test]
    fn replace_empty_needle_is_noop() {
        assert_eq!(replace("abc", "", "X"), None);
    }

    #[test]
    fn replace_empty_text_is_noop() {
        assert_eq!(replace("", "a", "X"), None);
    }

    #[test]
    fn replace_with_empty_replacement_deletes() {
        assert_eq!(replace("banana", "an", "").as_deref(), Some("ba"));
    }

    #[test]
    fn replace_without_match_returns_input() {
        assert_eq!(replace("banana", "xyz", "Q").as_deref(), Some("banana"));
    }

    #[test]
    fn replace_longer_replacement_grows() {
        assert_eq!(
            replace("a-b-c", "-", "<=>").as_deref(),
            Some("a<=>b<=>c")
        );
    }

    #[test]
    fn replace_is_non_overlapping() {
        assert_eq!(replace("aaaa", "aa", "b").as_deref(), Some("bb"));
    }
}
