//! Single server-backed entities.
//!
//! A [`Resource`] holds an arbitrary attribute bag, because the fields a
//! route exposes are not known ahead of time, and tracks whether it mirrors
//! a persisted record:
//!
//! ```text
//! New --create--> Persisted --update--> Persisted
//! New --find----> Persisted --delete--> New (attributes kept)
//! ```
//!
//! A 422 response to `create` or `update` is not returned as an error. Each
//! reported field is recorded in [`Resource::errors`] with the server's
//! message and a pattern that matches anything but the rejected value, and
//! the operation resolves `Ok`. Check [`Resource::has_errors`] after saving.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let mut user = client.resource("users")?;
//! user.set("name", json!(""));
//! user.save().await?;
//!
//! if user.has_errors() {
//!     for (field, error) in user.errors() {
//!         println!("{field}: {}", error.message);
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, Transport, UNPROCESSABLE_ENTITY,
};
use crate::config::{ModelConfig, Route};
use crate::rest::base::{Model, ModelBase};
use crate::rest::errors::{ModelError, ProtocolError, UsageError};
use crate::rest::pattern::not_equal_pattern;

const DEFAULT_PRIMARY_KEY: &str = "id";

/// A field-level validation failure reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The server's message for the field.
    pub message: String,
    /// A regular expression matching any value except the rejected one.
    pub pattern: String,
}

/// One entry of a 422 response body.
#[derive(Deserialize)]
struct FieldError {
    field: String,
    message: String,
}

/// A single server record with a create/update/delete lifecycle.
#[derive(Debug)]
pub struct Resource<T: Transport = HttpClient> {
    base: ModelBase,
    transport: Arc<T>,
    attributes: Map<String, Value>,
    primary_key: String,
    from_server: bool,
    errors: HashMap<String, ValidationError>,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
    assert_send_sync::<ValidationError>();
};

impl<T: Transport> Model for Resource<T> {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }
}

impl<T: Transport> Resource<T> {
    pub(crate) fn new(route: Route, config: &ModelConfig, transport: Arc<T>) -> Self {
        Self {
            base: ModelBase::new(route, config),
            transport,
            attributes: Map::new(),
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
            from_server: false,
            errors: HashMap::new(),
        }
    }

    /// All attributes of the record.
    #[must_use]
    pub const fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns an attribute.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Sets an attribute.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(field.into(), value.into());
        self
    }

    /// Merges `data` into the attributes, replacing fields with the same name.
    pub fn set_data(&mut self, data: Map<String, Value>) -> &mut Self {
        self.attributes.extend(data);
        self
    }

    /// Name of the attribute identifying the record (`"id"` by default).
    #[must_use]
    pub fn primary_key_name(&self) -> &str {
        &self.primary_key
    }

    /// Changes the attribute identifying the record.
    pub fn set_primary_key_name(&mut self, name: impl Into<String>) {
        self.primary_key = name.into();
    }

    /// Value of the primary key, `None` when absent or `null`.
    #[must_use]
    pub fn primary_key(&self) -> Option<&Value> {
        self.attributes
            .get(&self.primary_key)
            .filter(|value| !value.is_null())
    }

    /// Returns `true` once the resource reflects a persisted record.
    #[must_use]
    pub const fn from_server(&self) -> bool {
        self.from_server
    }

    /// Returns `true` unless the resource was fetched or saved and has a
    /// primary key.
    #[must_use]
    pub fn is_new(&self) -> bool {
        !self.from_server || self.primary_key().is_none()
    }

    /// Field errors from the last rejected `create` or `update`.
    #[must_use]
    pub const fn errors(&self) -> &HashMap<String, ValidationError> {
        &self.errors
    }

    /// Returns `true` if any field error is recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Removes all field errors.
    pub fn clear_errors(&mut self) {
        if self.has_errors() {
            self.errors.clear();
        }
    }

    /// Fetches record `id` and merges it into the attributes.
    ///
    /// # Errors
    ///
    /// - [`UsageError::MissingId`] if `id` renders as an empty string
    /// - [`ProtocolError::UnexpectedBody`] if the body is not a JSON object
    /// - [`ModelError::Http`] if the request fails
    pub async fn find(&mut self, id: impl Display) -> Result<&mut Self, ModelError> {
        let id = id.to_string();
        if id.trim().is_empty() {
            return Err(UsageError::MissingId.into());
        }

        let request = HttpRequest::builder(HttpMethod::Get, self.member_url(&id))
            .query(self.base.selector_params())
            .extra_headers(self.base.headers().clone())
            .build()
            .map_err(HttpError::from)?;

        let response = self.transport.send(request).await?;
        let Value::Object(data) = response.body else {
            return Err(ProtocolError::UnexpectedBody {
                expected: "a JSON object",
            }
            .into());
        };
        self.set_data(data);
        self.from_server = true;
        Ok(self)
    }

    /// Creates the record on the server.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::UnexpectedBody`] if a success or 422 body has the
    ///   wrong shape
    /// - [`ModelError::Http`] for any failure other than 422
    pub async fn create(&mut self) -> Result<&mut Self, ModelError> {
        self.clear_errors();
        let url = self.base.base_url().to_string();
        if self.submit(HttpMethod::Post, url).await? {
            self.from_server = true;
        }
        Ok(self)
    }

    /// Sends the attributes of a persisted record to the server.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotPersisted`] if the resource is new; nothing is sent
    /// - [`ProtocolError::UnexpectedBody`] if a success or 422 body has the
    ///   wrong shape
    /// - [`ModelError::Http`] for any failure other than 422
    pub async fn update(&mut self) -> Result<&mut Self, ModelError> {
        let url = self.persisted_url("update")?;
        self.clear_errors();
        self.submit(HttpMethod::Put, url).await?;
        Ok(self)
    }

    /// Creates the record if it is new, updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    pub async fn save(&mut self) -> Result<&mut Self, ModelError> {
        if self.is_new() {
            self.create().await
        } else {
            self.update().await
        }
    }

    /// Deletes the record on the server. The attributes are kept and the
    /// resource becomes new again.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotPersisted`] if the resource is new; nothing is sent
    /// - [`ModelError::Http`] if the request fails
    pub async fn delete(&mut self) -> Result<&mut Self, ModelError> {
        let url = self.persisted_url("delete")?;
        let request = HttpRequest::builder(HttpMethod::Delete, url)
            .extra_headers(self.base.headers().clone())
            .build()
            .map_err(HttpError::from)?;

        self.transport.send(request).await?;
        self.from_server = false;
        Ok(self)
    }

    fn member_url(&self, id: &str) -> String {
        format!("{}/{}", self.base.base_url(), urlencoding::encode(id))
    }

    fn persisted_url(&self, operation: &'static str) -> Result<String, UsageError> {
        match self.primary_key() {
            Some(id) if self.from_server => Ok(self.member_url(&text_of(Some(id)))),
            _ => Err(UsageError::NotPersisted { operation }),
        }
    }

    /// Sends the attributes; returns `false` if the server rejected them
    /// with field errors.
    async fn submit(&mut self, method: HttpMethod, url: String) -> Result<bool, ModelError> {
        let request = HttpRequest::builder(method, url)
            .query(self.base.selector_params())
            .extra_headers(self.base.headers().clone())
            .body(Value::Object(self.attributes.clone()))
            .body_type(DataType::Json)
            .build()
            .map_err(HttpError::from)?;

        match self.transport.send(request).await {
            Ok(response) => {
                match response.body {
                    Value::Object(data) => {
                        self.set_data(data);
                    }
                    Value::Null => {}
                    _ => {
                        return Err(ProtocolError::UnexpectedBody {
                            expected: "a JSON object",
                        }
                        .into())
                    }
                }
                Ok(true)
            }
            Err(HttpError::Response(error)) if error.code == UNPROCESSABLE_ENTITY => {
                self.record_errors(&error.body)?;
                Ok(false)
            }
            Err(error) => Err(error.into()),
        }
    }

    fn record_errors(&mut self, body: &Value) -> Result<(), ProtocolError> {
        let Value::Array(entries) = body else {
            return Err(ProtocolError::UnexpectedBody {
                expected: "a JSON array of field errors",
            });
        };

        for entry in entries {
            let FieldError { field, message } = match FieldError::deserialize(entry) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed validation entry");
                    continue;
                }
            };
            let pattern = not_equal_pattern(&text_of(self.attributes.get(&field)));
            self.errors
                .insert(field, ValidationError { message, pattern });
        }

        tracing::warn!(
            route = %self.base.route(),
            fields = self.errors.len(),
            "server rejected resource with validation errors"
        );
        Ok(())
    }
}

/// Textual form of an attribute as a form input would hold it.
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
