//! Query-string extraction for server-echoed URLs.

use std::collections::HashMap;

/// Parses the query string of a URL into a flat map.
///
/// Pairs are split on `&`, and each pair on its first `=`. Values are kept
/// raw (not percent-decoded); a key without `=` maps to `None`. A URL with
/// no `?` yields an empty map, and any `#fragment` is ignored. Empty pairs
/// (as in `a=1&&b=2`) are skipped; a repeated key keeps its last value.
///
/// # Example
///
/// ```rust
/// use yii_model::rest::parse_query_params;
///
/// let params = parse_query_params("http://api/users?page=3&per-page=20&flag");
/// assert_eq!(params.get("page"), Some(&Some("3".to_string())));
/// assert_eq!(params.get("per-page"), Some(&Some("20".to_string())));
/// assert_eq!(params.get("flag"), Some(&None));
/// ```
#[must_use]
pub fn parse_query_params(url: &str) -> HashMap<String, Option<String>> {
    let Some((_, query)) = url.split_once('?') else {
        return HashMap::new();
    };
    let query = query.split_once('#').map_or(query, |(q, _)| q);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(value.to_string())),
            None => (pair.to_string(), None),
        })
        .collect()
}
