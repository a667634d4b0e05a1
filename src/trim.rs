//! Whitespace trimming over byte buffers.
//!
//! `trim` is the borrowed-slice form the predicates build on; `trim_into`
//! is the bounded-buffer form for callers that own their destination
//! storage. Whitespace means ASCII whitespace throughout.

/// Strip leading and trailing ASCII whitespace, returning a sub-slice of
/// the input.
///
/// Two-pointer scan: the forward pointer walks past leading whitespace,
/// the backward pointer shrinks past trailing whitespace. An all-whitespace
/// or empty input yields the empty string.
pub fn trim(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();

    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }

    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    // start/end only ever stop on ASCII bytes, so both are char boundaries.
    &text[start..end]
}

/// Trim `text` into a caller-supplied destination buffer, returning the
/// number of bytes written.
///
/// - A zero-length destination is a no-op (returns 0, no failure).
/// - The destination is zero-filled up to its full length before writing,
///   so no residual data survives from a previous use of the buffer.
/// - A destination smaller than the trimmed result truncates; every write
///   is bounded by the destination length.
pub fn trim_into(out: &mut [u8], text: &str) -> usize {
    if out.is_empty() {
        return 0;
    }

    clear(out);

    let trimmed = trim(text).as_bytes();
    let written = trimmed.len().min(out.len());
    out[..written].copy_from_slice(&trimmed[..written]);
    written
}

/// Zero-fill a buffer.
pub fn clear(buf: &mut [u8]) {
    buf.fill(0);
}
