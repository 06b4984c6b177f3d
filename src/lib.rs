//! # Yii Model
//!
//! Client-side models for REST APIs that follow the Yii2 conventions:
//! `X-Pagination-*` response headers, RFC 5988 style `Link` headers for
//! navigation, and 422 responses carrying field-level validation errors.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ModelConfig`] and [`ModelConfigBuilder`]
//! - Validated newtypes for the base URL and route names
//! - A [`ModelClient`] factory creating collections and resources
//! - [`Collection`]: paginated lists kept in sync with the server's `self` link
//! - [`Resource`]: single records with a create/update/delete lifecycle
//! - A pluggable [`Transport`] with a reqwest-backed default, [`HttpClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use yii_model::{BaseUrl, ModelClient, ModelConfig};
//!
//! let config = ModelConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = ModelClient::new(config);
//! let users = client.collection("users").unwrap();
//! assert_eq!(users.per_page(), 20);
//! ```
//!
//! ## Browsing a Collection
//!
//! ```rust,ignore
//! use yii_model::Model;
//!
//! let mut users = client.collection("users")?;
//! users.with(["profile", "posts"]).load(Some(50)).await?;
//!
//! println!("{} users in total", users.meta().total_count);
//! while users.next_page().await? {
//!     for user in users.data() {
//!         println!("{}", user["name"]);
//!     }
//! }
//!
//! // Jump to a page; a page beyond the last one is ignored
//! users.get_page(3).await?;
//!
//! // Filter the list and start over
//! users.where_filters([("status", "active")]).await?;
//! ```
//!
//! ## Saving a Resource
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let mut user = client.resource("users")?;
//! user.set("name", json!("Ann")).set("email", json!("ann@example.com"));
//! user.save().await?; // POST, the resource is persisted afterwards
//!
//! // A 422 response does not fail the call: the field errors are recorded
//! if user.has_errors() {
//!     let error = &user.errors()["email"];
//!     println!("{} (valid unless it matches {})", error.message, error.pattern);
//! }
//!
//! user.delete().await?; // the resource is new again
//! ```
//!
//! ## Custom Transports
//!
//! Any type implementing [`Transport`] can replace the bundled client, for
//! example to reuse an existing HTTP stack or to record requests in tests:
//!
//! ```rust,ignore
//! let client = ModelClient::with_transport(config, MyTransport::default());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and builders validate on construction
//! - **Thread-safe**: All public types are `Send + Sync`
//! - **One operation at a time**: Network operations take `&mut self`, so a
//!   model never has two requests in flight
//! - **Server is authoritative**: Pagination state is re-read from every response

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, ModelConfig, ModelConfigBuilder, PaginationHeaders, Route};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Transport,
};

// Re-export model types
pub use rest::{
    Collection, Links, Model, ModelClient, ModelError, PaginationMeta, ProtocolError, Resource,
    UsageError, ValidationError,
};
