//! The transport boundary used by every model.
//!
//! Models never talk to the network directly: they build an [`HttpRequest`]
//! and hand it to a [`Transport`]. [`HttpClient`](crate::clients::HttpClient)
//! is the reqwest-backed implementation; tests and applications with their
//! own HTTP stack can supply another.

use std::future::Future;

use crate::clients::{HttpError, HttpRequest, HttpResponse};

/// Sends requests on behalf of collections and resources.
///
/// Implementations must resolve with `Ok` only for 2xx responses and report
/// every other status as [`HttpError::Response`], keeping the decoded body so
/// that validation payloads can be read.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::future::Future;
///
/// use serde_json::json;
/// use yii_model::clients::{HttpError, HttpRequest, HttpResponse, Transport};
///
/// /// Answers every request with an empty object.
/// struct Canned;
///
/// impl Transport for Canned {
///     fn send(
///         &self,
///         _request: HttpRequest,
///     ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
///         async { Ok(HttpResponse::new(200, HashMap::new(), json!({}))) }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Sends a request and resolves with the response.
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
