//! Delimiter-based tokenizing.
//!
//! Tokens are maximal runs of non-delimiter characters, in order of
//! appearance. Consecutive delimiters collapse; no token is ever empty
//! (strtok semantics, not field-splitting semantics). The input is read
//! through an immutable view with start/end indices rather than mutated
//! in place.

use crate::classify;

/// Split `text` into owned tokens on any character in `delimiters`.
///
/// Blank `text` or blank `delimiters` yields an empty sequence, as does
/// input consisting only of delimiters. The returned length is the token
/// count.
pub fn split(text: &str, delimiters: &str) -> Vec<String> {
    if classify::is_blank(text) || classify::is_blank(delimiters) {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, ch) in text.char_indices() {
        if delimiters.contains(ch) {
            if let Some(s) = start.take() {
                tokens.push(text[s..i].to_string());
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        tokens.push(text[s..].to_string());
    }

    tokens
}
