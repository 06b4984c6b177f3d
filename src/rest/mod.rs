//! Collection and resource models for Yii2 style REST APIs.
//!
//! This module maps the conventions of a Yii2 REST server onto two models:
//!
//! - **[`Collection`]**: one page of a list endpoint, driven by the
//!   `X-Pagination-*` headers and the `Link` header
//! - **[`Resource`]**: a single record with a create/update/delete lifecycle
//!   and field errors recovered from 422 responses
//!
//! Both are created by a [`ModelClient`] and share the [`Model`] accessors
//! for route, `expand`/`fields` selectors and extra headers.
//!
//! The protocol helpers are public as well: [`parse_link_header`],
//! [`parse_query_params`], [`escape_pattern`] and [`not_equal_pattern`].
//!
//! # Example
//!
//! ```rust,ignore
//! use yii_model::{BaseUrl, Model, ModelClient, ModelConfig};
//! use serde_json::json;
//!
//! let client = ModelClient::new(
//!     ModelConfig::builder()
//!         .base_url(BaseUrl::new("https://api.example.com/v1")?)
//!         .build()?,
//! );
//!
//! // Browse a list
//! let mut posts = client.collection("posts")?;
//! posts.with("author").where_filters([("status", "published")]).await?;
//! for post in posts.data() {
//!     println!("{}", post["title"]);
//! }
//! if posts.exist_next() {
//!     posts.next_page().await?;
//! }
//!
//! // Edit a record
//! let mut post = client.resource("posts")?;
//! post.find(7).await?;
//! post.set("title", json!("Renamed"));
//! post.save().await?;
//! if post.has_errors() {
//!     println!("{:?}", post.errors());
//! }
//! ```

mod base;
mod client;
mod collection;
mod errors;
mod link;
mod pattern;
mod query;
mod resource;
mod selector;

pub use base::{Model, ModelBase};
pub use client::ModelClient;
pub use collection::{Collection, PaginationMeta};
pub use errors::{ModelError, ProtocolError, UsageError};
pub use link::{parse_link_header, Links};
pub use pattern::{escape_pattern, not_equal_pattern};
pub use query::parse_query_params;
pub use resource::{Resource, ValidationError};
pub use selector::Selector;
