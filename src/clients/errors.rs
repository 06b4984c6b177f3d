//! HTTP-specific error types.
//!
//! This module contains the error types a [`Transport`](crate::clients::Transport)
//! reports: non-2xx responses, requests that fail validation before being
//! sent, and network failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses, with the decoded body
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use yii_model::clients::HttpError;
//!
//! match transport.send(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Status code used by the backend to report field-level validation failures.
pub const UNPROCESSABLE_ENTITY: u16 = 422;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The decoded JSON body is kept so callers can inspect structured error
/// payloads, such as the `[{field, message}]` list sent with a 422.
///
/// # Example
///
/// ```rust
/// use yii_model::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError::new(404, json!({"message": "Not found"}), None);
/// assert_eq!(error.code, 404);
/// assert!(error.to_string().contains("Not found"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Human readable summary of the failure.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

impl HttpResponseError {
    /// Creates a response error, deriving the message from the body.
    ///
    /// Yii2 error payloads carry a `message` field; any other body is
    /// rendered as compact JSON.
    #[must_use]
    pub fn new(code: u16, body: serde_json::Value, error_reference: Option<String>) -> Self {
        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| body.to_string(), ToString::to_string);

        Self {
            code,
            body,
            message,
            error_reference,
        }
    }
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no URL.
    #[error("Cannot send a request without a URL.")]
    EmptyUrl,

    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
