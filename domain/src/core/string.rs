//! String utilities for the domain layer.

/// Take the first `max_chars` characters of a string.
///
/// Counts Unicode scalar values, not bytes, so multi-byte text is never
/// split inside a character. Returns the whole string when it is shorter.
pub fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Truncate a string for log output, appending `...` when shortened
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    let prefix = char_prefix(s, max_chars);
    if prefix.len() == s.len() {
        s.to_string()
    } else {
        format!("{}...", prefix)
    }
}
