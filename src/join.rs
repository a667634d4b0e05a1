//! String concatenation helpers.

/// Concatenate values in order with no separator.
///
/// Returns `None` for an empty sequence. The reported length includes one
/// terminator slot past the concatenated bytes, for callers sizing storage
/// from it: `["foo", "bar", "baz"]` yields `("foobarbaz", 10)`.
pub fn join_strings<S: AsRef<str>>(values: &[S]) -> Option<(String, usize)> {
    if values.is_empty() {
        return None;
    }

    let mut result = String::new();
    for value in values {
        result.push_str(value.as_ref());
    }

    let length = result.len() + 1;
    Some((result, length))
}

/// Concatenate `prefix` then `source` into a fresh value.
///
/// Returns `None` if either argument is empty.
pub fn prepend_to(prefix: &str, source: &str) -> Option<String> {
    if prefix.is_empty() || source.is_empty() {
        return None;
    }

    let mut result = String::with_capacity(prefix.len() + source.len());
    result.push_str(prefix);
    result.push_str(source);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_concatenates_in_order() {
        let (text, length) = join_strings(&["foo", "bar", "baz"]).unwrap();
        assert_eq!(text, "foobarbaz");
        assert_eq!(length, 10);
    }

    #[test]
    fn join_single_value() {
        let (text, length) = join_strings(&["only"]).unwrap();
        assert_eq!(text, "only");
        assert_eq!(length, 5);
    }

    #[test]
    fn join_empty_sequence_is_noop() {
        assert_eq!(join_strings::<&str>(&[]), None);
    }

    #[test]
    fn join_tolerates_empty_members() {
        let (text, length) = join_strings(&["a", "", "b"]).unwrap();
        assert_eq!(text, "ab");
        assert_eq!(length, 3);
    }

    #[test]
    fn prepend_glues_prefix_and_source() {
        assert_eq!(prepend_to("/usr/", "local").as_deref(), Some("/usr/local"));
    }

    #[test]
    fn prepend_empty_arguments_are_noop() {
        assert_eq!(prepend_to("", "x"), None);
        assert_eq!(prepend_to("x", ""), None);
    }
}
