//! HTTP transport types.
//!
//! This module provides the boundary between the models and the network.
//! Models build [`HttpRequest`] values and hand them to a [`Transport`];
//! [`HttpClient`] is the default reqwest-backed transport.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The trait every transport implements
//! - [`HttpClient`]: The async reqwest client implementing [`Transport`]
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`HttpError`]: Unified error type for transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use yii_model::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "https://api.example.com/users")
//!     .query_param("page", "2")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! Retries, timeouts and cancellation are left to the transport; the
//! bundled client performs a single attempt per request.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod transport;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, UNPROCESSABLE_ENTITY};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::Transport;
