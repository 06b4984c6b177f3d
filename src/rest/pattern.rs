//! Regular-expression helpers for validation errors.
//!
//! When the server rejects a field, the resource records a pattern matching
//! every value *except* the one that was rejected, so a client-side form
//! validator keeps flagging the field until the user edits it.

/// Characters that carry meaning inside a regular expression.
const METACHARACTERS: &[char] = &[
    '.', '\\', '+', '*', '?', '[', '^', ']', '$', '(', ')', '{', '}', '=', '!', '<', '>', '|', ':',
    '-',
];

/// Escapes regular-expression metacharacters so `value` matches literally.
///
/// # Example
///
/// ```rust
/// use yii_model::rest::escape_pattern;
///
/// assert_eq!(escape_pattern("$40"), r"\$40");
/// assert_eq!(escape_pattern("*RRRING* Hello?"), r"\*RRRING\* Hello\?");
/// ```
#[must_use]
pub fn escape_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds a pattern matching any string except `value`.
///
/// The pattern is a negative lookahead around the escaped value:
/// `(?!^<value>$)(^.*$)`.
///
/// # Example
///
/// ```rust
/// use yii_model::rest::not_equal_pattern;
///
/// assert_eq!(not_equal_pattern("a.b"), r"(?!^a\.b$)(^.*$)");
/// assert_eq!(not_equal_pattern(""), "(?!^$)(^.*$)");
/// ```
#[must_use]
pub fn not_equal_pattern(value: &str) -> String {
    format!("(?!^{}$)(^.*$)", escape_pattern(value))
}
