//! Error types for collection and resource operations.
//!
//! Failures fall into four groups, each with its own type:
//!
//! - [`ConfigError`]: invalid route, header map or configuration
//! - [`UsageError`]: an operation called in the wrong lifecycle state,
//!   e.g. updating a resource that was never saved
//! - [`ProtocolError`]: a response that does not follow the pagination
//!   protocol (missing or malformed `Link` header, missing `self` link)
//! - [`HttpError`]: any transport failure, propagated untouched
//!
//! [`ModelError`] unifies them so every operation can use `?`.
//!
//! A 422 on `create`/`update` is *not* an error: it is recovered into the
//! resource's field errors.
//!
//! # Example
//!
//! ```rust,ignore
//! use yii_model::rest::{ModelError, ProtocolError};
//!
//! match users.load(None).await {
//!     Ok(_) => println!("{} users", users.data().len()),
//!     Err(ModelError::Protocol(ProtocolError::MissingLinkHeader)) => {
//!         eprintln!("expose the Link header through CORS");
//!     }
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// A resource operation was called in a lifecycle state that forbids it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// `update` or `delete` was called on a resource that is still new.
    #[error("Cannot {operation} a resource that has not been saved yet.")]
    NotPersisted {
        /// The operation that was attempted.
        operation: &'static str,
    },

    /// `find` was called without an identifier.
    #[error("An item id is required to find a resource.")]
    MissingId,
}

/// A response did not follow the pagination protocol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The `Link` header is absent or empty.
    #[error("Unable to parse pagination headers. Check that the base URL points to the REST server and that the 'Link' header is exposed to the client (Access-Control-Expose-Headers).")]
    MissingLinkHeader,

    /// A `Link` header entry could not be split into URL and relation.
    #[error("Malformed Link header entry '{entry}': expected '<url>; rel=name'.")]
    MalformedLinkEntry {
        /// The offending entry.
        entry: String,
    },

    /// The parsed links have no `self` relation.
    #[error("Unexpected structure for the navigation links parsed from the response headers: missing 'self' relation.")]
    MissingSelfLink,

    /// A navigation relation needed for the request is absent.
    #[error("No '{rel}' link is available for this collection.")]
    MissingLink {
        /// The missing relation name.
        rel: &'static str,
    },

    /// The response body does not have the expected JSON shape.
    #[error("Unexpected response body: expected {expected}.")]
    UnexpectedBody {
        /// Description of the expected shape.
        expected: &'static str,
    },
}

/// Error type for collection and resource operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid configuration or input.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Operation not allowed in the current lifecycle state.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Response violated the pagination protocol.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ModelError {
    /// Returns the HTTP status code for transport failures with a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

// Verify ModelError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelError>();
};
