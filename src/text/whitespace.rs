//! Whitespace removal.
//!
//! Whitespace is the six ASCII characters space, tab, LF, VT, FF and CR.
//! Unicode separators such as U+00A0, U+0085 and U+3000 are ordinary
//! characters here and are kept.

/// Returns `true` for the ASCII whitespace characters removed by
/// [`strip_whitespace`].
///
/// Unlike `char::is_ascii_whitespace`, vertical tab (`\x0B`) is included.
#[must_use]
pub const fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Removes every whitespace character from `s`.
///
/// Non-whitespace characters keep their relative order. A string without
/// whitespace is returned unchanged.
///
/// # Examples
///
/// ```
/// use data_service::text::strip_whitespace;
///
/// assert_eq!(strip_whitespace("  a b\t\nc  "), "abc");
/// assert_eq!(strip_whitespace("世 界"), "世界");
/// ```
#[must_use]
pub fn strip_whitespace(s: &str) -> String {
    // Fast path: nothing to remove
    if !contains_whitespace(s) {
        return s.to_string();
    }
    s.chars().filter(|&c| !is_ascii_space(c)).collect()
}

/// Returns `true` if `s` contains at least one whitespace character.
#[must_use]
pub fn contains_whitespace(s: &str) -> bool {
    s.chars().any(is_ascii_space)
}
