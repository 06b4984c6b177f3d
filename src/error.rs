//! Configuration error types.
//!
//! This module contains the error type raised synchronously when a model or
//! its client is set up with invalid input: a missing route, a malformed base
//! URL, or a header map that cannot be sent over HTTP.
//!
//! # Error Handling
//!
//! All configuration constructors and setters return `Result<T, ConfigError>`
//! to enable fail-fast validation. Error messages are designed to be clear and
//! actionable.
//!
//! # Example
//!
//! ```rust
//! use yii_model::{ConfigError, Route};
//!
//! let result = Route::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyRoute)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or a model.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The route name is missing.
    #[error("Route name is missing. Please provide the name of the REST endpoint (e.g., 'users').")]
    EmptyRoute,

    /// The base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.example.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A request header name or value cannot be sent over HTTP.
    #[error("Invalid request header '{name}'. Header names must be non-empty HTTP tokens and values must be visible ASCII.")]
    InvalidHeader {
        /// The name of the offending header.
        name: String,
    },

    /// A pagination header name is empty.
    #[error("Pagination header name for '{field}' cannot be empty.")]
    EmptyPaginationHeader {
        /// The pagination field whose header name is empty.
        field: &'static str,
    },

    /// A page size of zero was requested.
    #[error("Per-page value must be a positive integer.")]
    InvalidPerPage,

    /// A page number of zero was requested.
    #[error("Page numbers start at 1.")]
    InvalidPage,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
