//! Parsing of RFC 5988 style `Link` headers.
//!
//! Yii2 announces pagination navigation through a header such as:
//!
//! ```text
//! Link: <http://api/users?page=2&per-page=20>; rel=self,
//!       <http://api/users?page=3&per-page=20>; rel=next
//! ```
//!
//! [`parse_link_header`] turns it into [`Links`], a map from relation name to
//! percent-decoded URL.

use std::collections::HashMap;

use serde::Serialize;

use crate::rest::errors::ProtocolError;

/// Navigation links of a collection, keyed by relation name.
///
/// # Example
///
/// ```rust
/// use yii_model::rest::parse_link_header;
///
/// let links = parse_link_header(
///     "<http://api/users?page=1>; rel=self, <http://api/users?page=2>; rel=\"next\"",
/// )
/// .unwrap();
///
/// assert_eq!(links.self_link(), Some("http://api/users?page=1"));
/// assert_eq!(links.next(), Some("http://api/users?page=2"));
/// assert!(links.prev().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Links(HashMap<String, String>);

impl Links {
    /// Returns the URL for a relation.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(String::as_str)
    }

    /// Returns `true` if the relation is present.
    #[must_use]
    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }

    /// The canonical URL of the page that was served.
    #[must_use]
    pub fn self_link(&self) -> Option<&str> {
        self.get("self")
    }

    /// URL of the following page.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.get("next")
    }

    /// URL of the preceding page.
    #[must_use]
    pub fn prev(&self) -> Option<&str> {
        self.get("prev")
    }

    /// URL of the first page.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.get("first")
    }

    /// URL of the last page.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.get("last")
    }

    /// Number of relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no relation is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(relation, url)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parses a `Link` header value into [`Links`].
///
/// Entries are separated by `,`; each must consist of exactly two
/// `;`-separated parts, `<url>` and `rel=name` (the name may be quoted).
/// URLs are percent-decoded. A later entry with the same relation replaces
/// an earlier one.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedLinkEntry`] for any entry that does not
/// have that shape, or whose URL does not decode to UTF-8.
pub fn parse_link_header(header: &str) -> Result<Links, ProtocolError> {
    let mut links = HashMap::new();

    for entry in header.split(',') {
        let malformed = || ProtocolError::MalformedLinkEntry {
            entry: entry.trim().to_string(),
        };

        let mut sections = entry.split(';');
        let (Some(target), Some(param), None) = (sections.next(), sections.next(), sections.next())
        else {
            return Err(malformed());
        };

        let target = target.trim();
        let url = target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::trim)
            .ok_or_else(malformed)?;

        let rel = param
            .trim()
            .strip_prefix("rel=")
            .map(|r| r.trim().trim_matches('"'))
            .filter(|r| !r.is_empty())
            .ok_or_else(malformed)?;

        let url = urlencoding::decode(url).map_err(|_| malformed())?;
        links.insert(rel.to_string(), url.into_owned());
    }

    Ok(Links(links))
}
