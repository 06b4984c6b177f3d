//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type returned by a
//! [`Transport`](crate::clients::Transport) for successful requests.

use std::collections::HashMap;

/// An HTTP response from the REST API.
///
/// Header names are stored lowercased; lookups through [`header`](Self::header)
/// are case-insensitive.
///
/// # Example
///
/// ```rust
/// use yii_model::HttpResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-pagination-page-count".to_string(), vec!["5".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!([]));
/// assert_eq!(response.header("X-Pagination-Page-Count"), Some("5"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, normalising header names to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value of a header joined with `", "`, if present.
    ///
    /// Servers may split list-valued headers such as `Link` over several
    /// header lines; joining restores the single comma-separated form.
    /// Blank lines are skipped.
    #[must_use]
    pub fn joined_header(&self, name: &str) -> Option<String> {
        let values: Vec<&str> = self
            .headers
            .get(&name.to_lowercase())?
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();
        Some(values.join(", ")).filter(|joined| !joined.is_empty())
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
