//! State shared by collections and resources.
//!
//! Both model kinds address a route below the configured base URL and carry
//! the same request selectors (`expand`, `fields`) and extra headers. That
//! state lives in [`ModelBase`]; the [`Model`] trait exposes it uniformly.

use std::collections::HashMap;

use crate::config::{verify_headers, ModelConfig, Route};
use crate::error::ConfigError;
use crate::rest::selector::Selector;

/// Route, selector and header state of a model.
#[derive(Clone, Debug)]
pub struct ModelBase {
    route: Route,
    base_url: String,
    expand: Option<String>,
    fields: Option<String>,
    headers: HashMap<String, String>,
}

impl ModelBase {
    pub(crate) fn new(route: Route, config: &ModelConfig) -> Self {
        let base_url = config.base_url().join(&route);
        Self {
            route,
            base_url,
            expand: None,
            fields: None,
            headers: HashMap::new(),
        }
    }

    /// The route name this model is bound to.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The configured base URL joined with the route.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Related resources the server should embed, comma-joined.
    #[must_use]
    pub fn expand(&self) -> Option<&str> {
        self.expand.as_deref()
    }

    /// Sets the `expand` selector; an empty selector clears it.
    pub fn set_expand(&mut self, expand: impl Into<Selector>) {
        self.expand = expand.into().into_value();
    }

    /// Fields the server should restrict the response to, comma-joined.
    #[must_use]
    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref()
    }

    /// Sets the `fields` selector; an empty selector clears it.
    pub fn set_fields(&mut self, fields: impl Into<Selector>) {
        self.fields = fields.into().into_value();
    }

    /// Extra headers sent with this model's requests.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Replaces the extra headers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a name or value cannot be
    /// sent over HTTP; the previous headers are kept.
    pub fn set_headers(&mut self, headers: HashMap<String, String>) -> Result<(), ConfigError> {
        verify_headers(&headers)?;
        self.headers = headers;
        Ok(())
    }

    /// The `expand` / `fields` query parameters that are set.
    pub(crate) fn selector_params(&self) -> HashMap<String, String> {
        let mut params = HashMap::new();
        if let Some(expand) = &self.expand {
            params.insert("expand".to_string(), expand.clone());
        }
        if let Some(fields) = &self.fields {
            params.insert("fields".to_string(), fields.clone());
        }
        params
    }
}

/// Accessors common to [`Collection`](crate::rest::Collection) and
/// [`Resource`](crate::rest::Resource).
///
/// # Example
///
/// ```rust,ignore
/// use yii_model::Model;
///
/// let mut users = client.collection("users")?;
/// users.with(["profile", "posts"]).select("id,name");
/// assert_eq!(users.base_url(), "https://api.example.com/users");
/// ```
pub trait Model {
    /// Shared state of the model.
    fn base(&self) -> &ModelBase;

    /// Mutable shared state of the model.
    fn base_mut(&mut self) -> &mut ModelBase;

    /// The route name this model is bound to.
    fn route(&self) -> &Route {
        self.base().route()
    }

    /// The configured base URL joined with the route.
    fn base_url(&self) -> &str {
        self.base().base_url()
    }

    /// Current `expand` selector.
    fn expand(&self) -> Option<&str> {
        self.base().expand()
    }

    /// Sets the `expand` selector.
    fn set_expand(&mut self, expand: impl Into<Selector>) {
        self.base_mut().set_expand(expand);
    }

    /// Current `fields` selector.
    fn fields(&self) -> Option<&str> {
        self.base().fields()
    }

    /// Sets the `fields` selector.
    fn set_fields(&mut self, fields: impl Into<Selector>) {
        self.base_mut().set_fields(fields);
    }

    /// Extra request headers.
    fn headers(&self) -> &HashMap<String, String> {
        self.base().headers()
    }

    /// Replaces the extra request headers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] for a header that cannot be sent.
    fn set_headers(&mut self, headers: HashMap<String, String>) -> Result<(), ConfigError> {
        self.base_mut().set_headers(headers)
    }

    /// Chaining form of [`set_expand`](Self::set_expand).
    fn with(&mut self, expand: impl Into<Selector>) -> &mut Self
    where
        Self: Sized,
    {
        self.set_expand(expand);
        self
    }

    /// Chaining form of [`set_fields`](Self::set_fields).
    fn select(&mut self, fields: impl Into<Selector>) -> &mut Self
    where
        Self: Sized,
    {
        self.set_fields(fields);
        self
    }
}
