//! The entry point that creates collections and resources.

use std::sync::Arc;

use crate::clients::{HttpClient, Transport};
use crate::config::{ModelConfig, Route};
use crate::error::ConfigError;
use crate::rest::collection::Collection;
use crate::rest::resource::Resource;

/// Creates models bound to one REST server.
///
/// The client is built once from a [`ModelConfig`] and shares its
/// configuration and transport with every model it creates. Cloning is
/// cheap.
///
/// # Example
///
/// ```rust,ignore
/// use yii_model::{BaseUrl, ModelClient, ModelConfig};
///
/// let config = ModelConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com/v1")?)
///     .build()?;
/// let client = ModelClient::new(config);
///
/// let mut users = client.collection("users")?;
/// users.load(None).await?;
///
/// let mut user = client.resource("users")?;
/// user.find(42).await?;
/// ```
#[derive(Debug)]
pub struct ModelClient<T: Transport = HttpClient> {
    config: Arc<ModelConfig>,
    transport: Arc<T>,
}

// Verify ModelClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ModelClient>();
};

impl<T: Transport> Clone for ModelClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl ModelClient<HttpClient> {
    /// Creates a client sending requests through [`HttpClient`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created (see
    /// [`HttpClient::new`]).
    #[must_use]
    pub fn new(config: ModelConfig) -> Self {
        let transport = HttpClient::new(&config);
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ModelClient<T> {
    /// Creates a client sending requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ModelConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// The configuration shared by every model of this client.
    #[must_use]
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// The transport shared by every model of this client.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Creates an empty collection for `route`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoute`] if `route` is blank.
    pub fn collection(&self, route: &str) -> Result<Collection<T>, ConfigError> {
        let route = Route::new(route)?;
        Ok(Collection::new(
            route,
            Arc::clone(&self.config),
            Arc::clone(&self.transport),
        ))
    }

    /// Creates a new, unsaved resource for `route`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoute`] if `route` is blank.
    pub fn resource(&self, route: &str) -> Result<Resource<T>, ConfigError> {
        let route = Route::new(route)?;
        Ok(Resource::new(route, &self.config, Arc::clone(&self.transport)))
    }

    /// Alias of [`collection`](Self::collection).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoute`] if `route` is blank.
    pub fn all(&self, route: &str) -> Result<Collection<T>, ConfigError> {
        self.collection(route)
    }

    /// Alias of [`resource`](Self::resource).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRoute`] if `route` is blank.
    pub fn one(&self, route: &str) -> Result<Resource<T>, ConfigError> {
        self.resource(route)
    }
}
