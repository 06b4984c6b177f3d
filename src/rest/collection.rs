//! Paginated collections.
//!
//! A [`Collection`] mirrors one page of a Yii2 REST list endpoint. Every
//! fetch goes through the response synchronizer, which:
//!
//! 1. replaces the records with the response body (a JSON array),
//! 2. reads the four `X-Pagination-*` headers into [`PaginationMeta`],
//! 3. parses the `Link` header into [`Links`], requiring a `self` relation,
//! 4. re-derives `page`, `per-page`, `expand` and `fields` from the query
//!    string of the `self` link.
//!
//! The server is the source of truth: if it clamps `per-page` or ignores an
//! `expand`, the collection reflects what was actually served. The response
//! is validated in full before anything is committed, so a protocol error
//! leaves the previous page untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut users = client.collection("users")?;
//! users.with(["profile"]).load(Some(50)).await?;
//!
//! while users.next_page().await? {
//!     println!("page {} of {}", users.meta().current_page, users.meta().page_count);
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::config::{ModelConfig, Route};
use crate::error::ConfigError;
use crate::rest::base::{Model, ModelBase};
use crate::rest::errors::{ModelError, ProtocolError};
use crate::rest::link::{parse_link_header, Links};
use crate::rest::query::parse_query_params;
use crate::rest::selector::Selector;

/// Pagination metadata read from the response headers.
///
/// All fields are zero until the first page has been loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// The page that was served, starting at 1.
    pub current_page: u64,
    /// Total number of pages.
    pub page_count: u64,
    /// Number of records per page.
    pub per_page: u64,
    /// Total number of records across all pages.
    pub total_count: u64,
}

/// A paginated list of server records.
#[derive(Debug)]
pub struct Collection<T: Transport = HttpClient> {
    base: ModelBase,
    config: Arc<ModelConfig>,
    transport: Arc<T>,
    data: Vec<Value>,
    meta: PaginationMeta,
    links: Links,
    page: u64,
    per_page: u64,
    filters: BTreeMap<String, String>,
}

// Verify Collection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Collection>();
};

impl<T: Transport> Model for Collection<T> {
    fn base(&self) -> &ModelBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ModelBase {
        &mut self.base
    }
}

impl<T: Transport> Collection<T> {
    pub(crate) fn new(route: Route, config: Arc<ModelConfig>, transport: Arc<T>) -> Self {
        let base = ModelBase::new(route, &config);
        let per_page = u64::from(config.default_per_page());
        Self {
            base,
            config,
            transport,
            data: Vec::new(),
            meta: PaginationMeta::default(),
            links: Links::default(),
            page: 1,
            per_page,
            filters: BTreeMap::new(),
        }
    }

    /// Records of the current page, as returned by the server.
    #[must_use]
    pub fn data(&self) -> &[Value] {
        &self.data
    }

    /// Pagination metadata of the current page.
    #[must_use]
    pub const fn meta(&self) -> &PaginationMeta {
        &self.meta
    }

    /// Navigation links of the current page.
    #[must_use]
    pub const fn links(&self) -> &Links {
        &self.links
    }

    /// The page requested by the next [`load`](Self::load).
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Sets the page requested by the next [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPage`] for page 0.
    pub fn set_page(&mut self, page: u64) -> Result<(), ConfigError> {
        if page == 0 {
            return Err(ConfigError::InvalidPage);
        }
        self.page = page;
        Ok(())
    }

    /// The page size requested by the next [`load`](Self::load).
    #[must_use]
    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Sets the page size requested by the next [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPerPage`] for a size of 0.
    pub fn set_per_page(&mut self, per_page: u64) -> Result<(), ConfigError> {
        if per_page == 0 {
            return Err(ConfigError::InvalidPerPage);
        }
        self.per_page = per_page;
        Ok(())
    }

    /// Filters merged into the list request.
    #[must_use]
    pub const fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Query parameters of the list request.
    ///
    /// Filters are merged first; the reserved keys `per-page`, `page`,
    /// `expand` and `fields` always take precedence over a filter of the
    /// same name.
    #[must_use]
    pub fn params(&self) -> HashMap<String, String> {
        let mut params: HashMap<String, String> = self
            .filters
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let mut reserved = self.base.selector_params();
        reserved.insert("per-page".to_string(), self.per_page.to_string());
        reserved.insert("page".to_string(), self.page.to_string());

        for (key, value) in reserved {
            if params.insert(key.clone(), value).is_some() {
                tracing::warn!(
                    route = %self.base.route(),
                    key = %key,
                    "filter overridden by reserved pagination parameter"
                );
            }
        }

        params
    }

    /// Returns `true` if the current page is the first one.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.meta.current_page == 1
    }

    /// Returns `true` if the current page is the last one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.meta.current_page == self.meta.page_count
    }

    /// Returns `true` if the server announced a next page.
    #[must_use]
    pub fn exist_next(&self) -> bool {
        self.links.next().is_some()
    }

    /// Returns `true` if the server announced a previous page.
    #[must_use]
    pub fn exist_prev(&self) -> bool {
        self.links.prev().is_some()
    }

    /// Fetches the page described by `page`, `per_page`, filters and
    /// selectors. A `per_page` argument replaces the current page size first.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPerPage`] for a `per_page` of 0
    /// - [`ModelError::Http`] if the request fails
    /// - [`ModelError::Protocol`] if the response breaks the pagination
    ///   protocol; the collection keeps its previous state
    pub async fn load(&mut self, per_page: Option<u64>) -> Result<&mut Self, ModelError> {
        if let Some(per_page) = per_page {
            self.set_per_page(per_page)?;
        }

        let request = HttpRequest::builder(HttpMethod::Get, self.base.base_url())
            .query(self.params())
            .extra_headers(self.base.headers().clone())
            .build()
            .map_err(HttpError::from)?;

        self.fetch(request).await?;
        Ok(self)
    }

    /// Fetches the first page.
    ///
    /// Returns `Ok(false)` without a request when already on the first page.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingLink`] if no `first` link is known,
    /// plus the errors of [`load`](Self::load).
    pub async fn first_page(&mut self) -> Result<bool, ModelError> {
        if self.is_first() {
            return Ok(false);
        }
        let url = self.require_link("first")?;
        self.navigate(url).await?;
        Ok(true)
    }

    /// Fetches the last page.
    ///
    /// Returns `Ok(false)` without a request when already on the last page.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingLink`] if no `last` link is known,
    /// plus the errors of [`load`](Self::load).
    pub async fn last_page(&mut self) -> Result<bool, ModelError> {
        if self.is_last() {
            return Ok(false);
        }
        let url = self.require_link("last")?;
        self.navigate(url).await?;
        Ok(true)
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(false)` without a request when there is no next page.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub async fn next_page(&mut self) -> Result<bool, ModelError> {
        let Some(url) = self.links.next().map(str::to_string) else {
            return Ok(false);
        };
        self.navigate(url).await?;
        Ok(true)
    }

    /// Fetches the previous page.
    ///
    /// Returns `Ok(false)` without a request when there is no previous page.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub async fn prev_page(&mut self) -> Result<bool, ModelError> {
        let Some(url) = self.links.prev().map(str::to_string) else {
            return Ok(false);
        };
        self.navigate(url).await?;
        Ok(true)
    }

    /// Fetches page `page`.
    ///
    /// Returns `Ok(false)` without a request for page 0, for the current
    /// page, and for a page beyond the last one once the page count is known.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub async fn get_page(&mut self, page: u64) -> Result<bool, ModelError> {
        let beyond_last = self.meta.page_count > 0 && page > self.meta.page_count;
        if page == 0 || page == self.meta.current_page || beyond_last {
            return Ok(false);
        }
        self.page = page;
        self.load(None).await?;
        Ok(true)
    }

    /// Re-fetches the current page through its `self` link, or loads it if
    /// nothing has been fetched yet.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub async fn refresh(&mut self) -> Result<&mut Self, ModelError> {
        match self.links.self_link().map(str::to_string) {
            Some(url) => {
                self.navigate(url).await?;
                Ok(self)
            }
            None => self.load(None).await,
        }
    }

    /// Replaces the filters and reloads.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub async fn where_filters<I, K, V>(&mut self, filters: I) -> Result<&mut Self, ModelError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.filters = filters
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.load(None).await
    }

    fn require_link(&self, rel: &'static str) -> Result<String, ProtocolError> {
        self.links
            .get(rel)
            .map(str::to_string)
            .ok_or(ProtocolError::MissingLink { rel })
    }

    /// Fetches a navigation link as-is; its query string already describes
    /// the page.
    async fn navigate(&mut self, url: String) -> Result<(), ModelError> {
        let request = HttpRequest::builder(HttpMethod::Get, url)
            .extra_headers(self.base.headers().clone())
            .build()
            .map_err(HttpError::from)?;
        self.fetch(request).await
    }

    async fn fetch(&mut self, request: HttpRequest) -> Result<(), ModelError> {
        let response = self.transport.send(request).await?;
        self.synchronize(response)?;
        Ok(())
    }

    fn synchronize(&mut self, response: HttpResponse) -> Result<(), ProtocolError> {
        let names = self.config.pagination_headers();
        let meta = PaginationMeta {
            current_page: header_count(&response, &names.current_page),
            page_count: header_count(&response, &names.page_count),
            per_page: header_count(&response, &names.per_page),
            total_count: header_count(&response, &names.total_count),
        };

        let header = response
            .joined_header("link")
            .filter(|value| !value.trim().is_empty())
            .ok_or(ProtocolError::MissingLinkHeader)?;
        let links = parse_link_header(&header)?;
        let self_link = links.self_link().ok_or(ProtocolError::MissingSelfLink)?;

        let Value::Array(data) = response.body else {
            return Err(ProtocolError::UnexpectedBody {
                expected: "a JSON array of records",
            });
        };

        let served = parse_query_params(self_link);
        let value = |key: &str| served.get(key).and_then(|v| v.as_deref());
        let page = value("page").and_then(|v| positive(v, "page"));
        let per_page = value("per-page")
            .or_else(|| value("perPage"))
            .and_then(|v| positive(v, "per-page"));
        let expand = value("expand")
            .filter(|v| !v.is_empty())
            .map(Selector::from);
        let fields = value("fields")
            .filter(|v| !v.is_empty())
            .map(Selector::from);

        if let Some(page) = page {
            self.page = page;
        }
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        if let Some(expand) = expand {
            self.base.set_expand(expand);
        }
        if let Some(fields) = fields {
            self.base.set_fields(fields);
        }
        self.data = data;
        self.meta = meta;
        self.links = links;

        tracing::debug!(
            route = %self.base.route(),
            page = self.page,
            per_page = self.per_page,
            page_count = self.meta.page_count,
            total_count = self.meta.total_count,
            "collection synchronized"
        );

        Ok(())
    }
}

/// Reads a pagination header as an integer; absent or invalid is 0.
fn header_count(response: &HttpResponse, name: &str) -> u64 {
    let Some(raw) = response.header(name) else {
        tracing::warn!(header = name, "pagination header missing");
        return 0;
    };

    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(header = name, value = %raw, "pagination header is not an integer");
        0
    })
}

fn positive(raw: &str, key: &str) -> Option<u64> {
    let parsed = raw.parse::<u64>().ok().filter(|n| *n > 0);
    if parsed.is_none() {
        tracing::warn!(key, value = raw, "ignoring invalid pagination value in self link");
    }
    parsed
}
