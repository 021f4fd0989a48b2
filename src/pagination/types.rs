//! Pagination types and traits
//!
//! Defines the uniform result shape, the per-call inputs every strategy
//! consumes, and the lookups the strategies share.

use crate::error::{Error, Result};
use crate::http::parse_link_header;
use crate::types::{Links, Relation, UNKNOWN_TOTAL};
use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName, LINK};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// Placeholder in an API base URL replaced by the request's hostname
pub const DOMAIN_PLACEHOLDER: &str = "{domain}";

// ============================================================================
// Pagination Result
// ============================================================================

/// One page of a provider response, normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationResult {
    /// Items of this page, in provider order
    pub page: Vec<Value>,
    /// Total number of items across all pages, `-1` when unknown
    pub total_count: i64,
    /// Links to other pages, relative to the API base URL
    pub links: Links,
}

impl PaginationResult {
    /// Create a result; any negative total collapses to the unknown sentinel
    pub fn new(page: Vec<Value>, total_count: i64, links: Links) -> Self {
        Self {
            page,
            total_count: total_count.max(UNKNOWN_TOTAL),
            links,
        }
    }

    /// Total item count, if the provider reported one
    pub fn total(&self) -> Option<u64> {
        u64::try_from(self.total_count).ok()
    }

    /// Link for a given relation
    pub fn link(&self, rel: Relation) -> Option<&str> {
        self.links.get(&rel).map(String::as_str)
    }

    /// Link to the next page
    pub fn next(&self) -> Option<&str> {
        self.link(Relation::Next)
    }

    /// Whether there is no next page to request
    pub fn is_last_page(&self) -> bool {
        self.next().is_none()
    }
}

// ============================================================================
// Call Inputs
// ============================================================================

/// Caller context for one API: its base URL
///
/// The base may contain a `{domain}` placeholder for providers reachable
/// through several regional hostnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiContext {
    api_url: String,
}

impl ApiContext {
    /// Create a context for the given base URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    /// The configured base URL, placeholder included
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Base URL with `{domain}` replaced by the hostname of `request_url`
    pub fn base_for(&self, request_url: &str) -> Result<String> {
        if !self.api_url.contains(DOMAIN_PLACEHOLDER) {
            return Ok(self.api_url.clone());
        }
        let parsed = url::Url::parse(request_url)?;
        let host = parsed
            .host_str()
            .ok_or(Error::InvalidUrl(url::ParseError::EmptyHost))?;
        Ok(self.api_url.replace(DOMAIN_PLACEHOLDER, host))
    }

    /// Turn a link produced by a paginator back into an absolute URL
    pub fn resolve(&self, request_url: &str, link: &str) -> Result<String> {
        Ok(format!("{}{}", self.base_for(request_url)?, link))
    }
}

/// Facts about one HTTP response the paginators may consult
#[derive(Debug, Clone, Default)]
pub struct ResponseContext {
    /// URL actually requested, after redirects
    pub url: String,
    /// Response headers (case-insensitive)
    pub headers: HeaderMap,
    /// Relation → absolute URL, from the `Link` header
    pub links: HashMap<String, String>,
}

impl ResponseContext {
    /// Create a context for a request URL with no headers
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Build a context from a received reqwest response
    ///
    /// Every `Link` header on the response is parsed and merged.
    pub fn from_response(response: &reqwest::Response) -> Self {
        let headers = response.headers().clone();
        let mut links = HashMap::new();
        for value in headers.get_all(LINK) {
            match value.to_str() {
                Ok(raw) => links.extend(parse_link_header(raw)),
                Err(_) => warn!("Ignoring non-ASCII Link header"),
            }
        }
        Self {
            url: response.url().to_string(),
            headers,
            links,
        }
    }

    /// Add a response header
    #[must_use]
    pub fn with_header(mut self, name: impl IntoHeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add an already parsed link
    #[must_use]
    pub fn with_link(mut self, rel: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.insert(rel.into(), url.into());
        self
    }

    /// Parse a raw `Link` header value and merge its relations
    #[must_use]
    pub fn with_link_header(mut self, header: &str) -> Self {
        self.links.extend(parse_link_header(header));
        self
    }

    /// Header value as a string, if present and valid ASCII
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

// ============================================================================
// Paginator Trait
// ============================================================================

/// Core trait for pagination strategies
///
/// Implementations hold only immutable configuration; a call depends on
/// nothing but its arguments.
pub trait Paginator: Send + Sync + fmt::Debug {
    /// Derive page, total count and links from one response
    fn paginate(
        &self,
        api: &ApiContext,
        response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult>;
}

// ============================================================================
// Shared Lookups
// ============================================================================

/// Follow nested object keys; any missing key yields `None`
pub(crate) fn lookup_path<'a>(body: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(body, |value, key| value.get(key))
}

/// A body value usable as a page position or cursor token
///
/// Empty strings, zero, null, booleans and containers count as absent.
pub(crate) fn link_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Locate the item list of a page
///
/// With a key the list must live there. Without one the body must hold
/// exactly one list-valued field.
pub(crate) fn locate_page(body: &Value, page_key: Option<&str>) -> Result<Vec<Value>> {
    if let Some(key) = page_key {
        return match body.get(key) {
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(_) => Err(Error::invalid_page(key, "expected a list")),
            None => Err(Error::invalid_page(key, "field is missing")),
        };
    }

    let Value::Object(map) = body else {
        return Err(Error::invalid_page("<body>", "expected an object"));
    };
    let mut lists = map.values().filter_map(Value::as_array);
    match (lists.next(), lists.next()) {
        (Some(items), None) => Ok(items.clone()),
        (None, _) => Err(Error::AmbiguousPageLocation { found: 0 }),
        (Some(_), Some(_)) => Err(Error::AmbiguousPageLocation {
            found: 2 + lists.count(),
        }),
    }
}

/// Read a total count field; anything but a non-negative integer is unknown
pub(crate) fn read_total(container: &Value, total_key: Option<&str>) -> i64 {
    let Some(value) = total_key.and_then(|key| container.get(key)) else {
        return UNKNOWN_TOTAL;
    };
    let total = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    total.filter(|n| *n >= 0).unwrap_or(UNKNOWN_TOTAL)
}

/// With no links this page is the whole result set, so its length is the total
pub(crate) fn resolve_total(links: &Links, page_len: usize, total: impl FnOnce() -> i64) -> i64 {
    if links.is_empty() {
        i64::try_from(page_len).unwrap_or(i64::MAX)
    } else {
        total()
    }
}
