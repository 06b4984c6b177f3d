//! Configuration types for the model client.
//!
//! This module provides the configuration shared by every collection and
//! resource created through a [`ModelClient`](crate::ModelClient).
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ModelConfig`]: The main configuration struct holding all client settings
//! - [`ModelConfigBuilder`]: A builder for constructing [`ModelConfig`] instances
//! - [`PaginationHeaders`]: The names of the four `X-Pagination-*` response headers
//! - [`BaseUrl`]: A validated API base URL
//! - [`Route`]: A validated REST route name
//!
//! # Example
//!
//! ```rust
//! use yii_model::{BaseUrl, ModelConfig};
//!
//! let config = ModelConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .default_per_page(50)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_per_page(), 50);
//! assert_eq!(config.pagination_headers().total_count, "X-Pagination-Total-Count");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Route};

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Default page size requested by a new collection.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Names of the response headers carrying pagination metadata.
///
/// The defaults match the headers emitted by Yii2's serializer. Servers that
/// rename them can be accommodated through [`ModelConfigBuilder::pagination_headers`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationHeaders {
    /// Header holding the total number of records.
    pub total_count: String,
    /// Header holding the number of pages.
    pub page_count: String,
    /// Header holding the page that was served.
    pub current_page: String,
    /// Header holding the page size that was served.
    pub per_page: String,
}

impl Default for PaginationHeaders {
    fn default() -> Self {
        Self {
            total_count: "X-Pagination-Total-Count".to_string(),
            page_count: "X-Pagination-Page-Count".to_string(),
            current_page: "X-Pagination-Current-Page".to_string(),
            per_page: "X-Pagination-Per-Page".to_string(),
        }
    }
}

impl PaginationHeaders {
    fn verify(&self) -> Result<(), ConfigError> {
        let fields = [
            ("total_count", &self.total_count),
            ("page_count", &self.page_count),
            ("current_page", &self.current_page),
            ("per_page", &self.per_page),
        ];
        for (field, name) in fields {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyPaginationHeader { field });
            }
        }
        Ok(())
    }
}

/// Configuration for the model client.
///
/// # Thread Safety
///
/// `ModelConfig` is `Clone`, `Send`, and `Sync`; models share it through an `Arc`.
///
/// # Example
///
/// ```rust
/// use yii_model::{BaseUrl, ModelConfig};
///
/// let config = ModelConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct ModelConfig {
    base_url: BaseUrl,
    pagination_headers: PaginationHeaders,
    default_per_page: u32,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ModelConfig {
    /// Creates a new builder for constructing a `ModelConfig`.
    #[must_use]
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the pagination header names.
    #[must_use]
    pub const fn pagination_headers(&self) -> &PaginationHeaders {
        &self.pagination_headers
    }

    /// Returns the page size a new collection starts with.
    #[must_use]
    pub const fn default_per_page(&self) -> u32 {
        self.default_per_page
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ModelConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelConfig>();
};

/// Builder for constructing [`ModelConfig`] instances.
///
/// The only required field is `base_url`.
///
/// # Defaults
///
/// - `pagination_headers`: the `X-Pagination-*` names used by Yii2
/// - `default_per_page`: 20
/// - `default_headers`: empty
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ModelConfigBuilder {
    base_url: Option<BaseUrl>,
    pagination_headers: Option<PaginationHeaders>,
    default_per_page: Option<u32>,
    default_headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ModelConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the pagination header names.
    #[must_use]
    pub fn pagination_headers(mut self, headers: PaginationHeaders) -> Self {
        self.pagination_headers = Some(headers);
        self
    }

    /// Sets the page size new collections request.
    #[must_use]
    pub const fn default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = Some(per_page);
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ModelConfig`], validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// [`ConfigError::EmptyPaginationHeader`] for a blank header name,
    /// [`ConfigError::InvalidPerPage`] for a zero page size, and
    /// [`ConfigError::InvalidHeader`] for a default header that cannot be sent.
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        let pagination_headers = self.pagination_headers.unwrap_or_default();
        pagination_headers.verify()?;

        let default_per_page = self.default_per_page.unwrap_or(DEFAULT_PER_PAGE);
        if default_per_page == 0 {
            return Err(ConfigError::InvalidPerPage);
        }

        verify_headers(&self.default_headers)?;

        Ok(ModelConfig {
            base_url,
            pagination_headers,
            default_per_page,
            default_headers: self.default_headers,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Checks that every entry of a header map can be sent over HTTP.
pub(crate) fn verify_headers(headers: &HashMap<String, String>) -> Result<(), ConfigError> {
    for (name, value) in headers {
        let valid = HeaderName::from_bytes(name.as_bytes()).is_ok()
            && HeaderValue::from_str(value).is_ok();
        if !valid {
            return Err(ConfigError::InvalidHeader { name: name.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = ModelConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = ModelConfig::builder().base_url(base_url()).build().unwrap();

        assert_eq!(config.default_per_page(), DEFAULT_PER_PAGE);
        assert_eq!(config.pagination_headers(), &PaginationHeaders::default());
        assert!(config.default_headers().is_empty());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let headers = PaginationHeaders {
            total_count: "X-Total".to_string(),
            page_count: "X-Pages".to_string(),
            current_page: "X-Page".to_string(),
            per_page: "X-Per-Page".to_string(),
        };

        let config = ModelConfig::builder()
            .base_url(base_url())
            .pagination_headers(headers.clone())
            .default_per_page(5)
            .default_header("Authorization", "Bearer token")
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.pagination_headers(), &headers);
        assert_eq!(config.default_per_page(), 5);
        assert_eq!(
            config.default_headers().get("Authorization"),
            Some(&"Bearer token".to_string())
        );
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_builder_rejects_blank_pagination_header() {
        let headers = PaginationHeaders {
            page_count: " ".to_string(),
            ..PaginationHeaders::default()
        };

        let result = ModelConfig::builder()
            .base_url(base_url())
            .pagination_headers(headers)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::EmptyPaginationHeader {
                field: "page_count"
            })
        ));
    }

    #[test]
    fn test_builder_rejects_zero_per_page() {
        let result = ModelConfig::builder()
            .base_url(base_url())
            .default_per_page(0)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidPerPage)));
    }

    #[test]
    fn test_builder_rejects_invalid_default_header() {
        let result = ModelConfig::builder()
            .base_url(base_url())
            .default_header("Bad Header", "value")
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidHeader { name }) if name == "Bad Header"
        ));
    }

    #[test]
    fn test_verify_headers_rejects_control_characters_in_values() {
        let mut headers = HashMap::new();
        headers.insert("X-Token".to_string(), "line\nbreak".to_string());

        assert!(verify_headers(&headers).is_err());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ModelConfig>();
    }
}
