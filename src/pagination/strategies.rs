//! Pagination strategy implementations
//!
//! Each strategy handles one provider convention. The structs double as
//! their own configuration: they deserialize from an endpoint definition and
//! are never mutated afterwards.

use super::types::{
    link_token, locate_page, lookup_path, read_total, resolve_total, ApiContext,
    PaginationResult, Paginator, ResponseContext,
};
use crate::error::{Error, Result};
use crate::types::{Links, Relation, UNKNOWN_TOTAL};
use crate::urls::{modify_query, strip_prefix};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

static NO_PAGING: Value = Value::Null;

// ============================================================================
// Query Parameter Pagination
// ============================================================================

/// Position-token pagination (e.g., Google APIs `pageToken`)
///
/// The body carries a token per relation; the link is the current request
/// URL with `param` set to that token.
/// Common patterns:
/// - `{ "nextPageToken": "CAoQAA", "items": [...] }`
/// - `{ "next_page": 4, "prev_page": 2, "items": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryParamPaginator {
    /// Query parameter holding the page position
    pub param: String,
    /// Body field holding the items (inferred when unset)
    #[serde(default)]
    pub page_key: Option<String>,
    /// Body field holding the total count
    #[serde(default)]
    pub total_key: Option<String>,
    /// Relation → body field holding that relation's position token
    #[serde(default)]
    pub links: BTreeMap<Relation, String>,
}

impl QueryParamPaginator {
    /// Create a new query parameter paginator
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            page_key: None,
            total_key: None,
            links: BTreeMap::new(),
        }
    }

    /// Set the body field holding the items
    #[must_use]
    pub fn with_page_key(mut self, key: impl Into<String>) -> Self {
        self.page_key = Some(key.into());
        self
    }

    /// Set the body field holding the total count
    #[must_use]
    pub fn with_total_key(mut self, key: impl Into<String>) -> Self {
        self.total_key = Some(key.into());
        self
    }

    /// Map a relation to the body field holding its token
    #[must_use]
    pub fn with_link(mut self, rel: Relation, field: impl Into<String>) -> Self {
        self.links.insert(rel, field.into());
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        require_non_empty("param", &self.param)?;
        require_optional_non_empty("page_key", self.page_key.as_deref())?;
        require_links(&self.links)
    }
}

impl Paginator for QueryParamPaginator {
    fn paginate(
        &self,
        api: &ApiContext,
        response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult> {
        let url = strip_prefix(api.api_url(), &response.url)?;

        let mut links = Links::new();
        for (rel, field) in &self.links {
            if let Some(token) = body.get(field).and_then(link_token) {
                trace!("{} token '{}' from field '{}'", rel, token, field);
                links.insert(*rel, modify_query(url, &self.param, Some(&token)));
            }
        }

        // The first page is the one requested without a position
        if links.contains_key(&Relation::Prev) && !links.contains_key(&Relation::First) {
            links.insert(Relation::First, modify_query(url, &self.param, None));
        }

        let page = locate_page(body, self.page_key.as_deref())?;
        let total_count = resolve_total(&links, page.len(), || {
            read_total(body, self.total_key.as_deref())
        });

        debug!(
            "Query param page: {} items, total {}, {} links",
            page.len(),
            total_count,
            links.len()
        );
        Ok(PaginationResult::new(page, total_count, links))
    }
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination (e.g., Twitch, Slack)
///
/// A single opaque cursor, possibly nested, serves every configured
/// relation; each relation puts it in its own query parameter.
/// Common patterns:
/// - `{ "data": [...], "pagination": { "cursor": "eyJi..." } }` → `?after=eyJi...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CursorPaginator {
    /// Nested body keys leading to the cursor
    #[serde(deserialize_with = "one_or_many")]
    pub cursor_key: Vec<String>,
    /// Body field holding the items (inferred when unset)
    #[serde(default)]
    pub page_key: Option<String>,
    /// Body field holding the total count
    #[serde(default)]
    pub total_key: Option<String>,
    /// Relation → query parameter that receives the cursor
    #[serde(default)]
    pub links: BTreeMap<Relation, String>,
}

impl CursorPaginator {
    /// Create a new cursor paginator from the key path to the cursor
    pub fn new<I, S>(cursor_key: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cursor_key: cursor_key.into_iter().map(Into::into).collect(),
            page_key: None,
            total_key: None,
            links: BTreeMap::new(),
        }
    }

    /// Set the body field holding the items
    #[must_use]
    pub fn with_page_key(mut self, key: impl Into<String>) -> Self {
        self.page_key = Some(key.into());
        self
    }

    /// Set the body field holding the total count
    #[must_use]
    pub fn with_total_key(mut self, key: impl Into<String>) -> Self {
        self.total_key = Some(key.into());
        self
    }

    /// Map a relation to the query parameter receiving the cursor
    #[must_use]
    pub fn with_link(mut self, rel: Relation, param: impl Into<String>) -> Self {
        self.links.insert(rel, param.into());
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.cursor_key.is_empty() {
            return Err(Error::config("cursor_key cannot be empty"));
        }
        for key in &self.cursor_key {
            require_non_empty("cursor_key", key)?;
        }
        require_optional_non_empty("page_key", self.page_key.as_deref())?;
        require_links(&self.links)
    }
}

impl Paginator for CursorPaginator {
    fn paginate(
        &self,
        api: &ApiContext,
        response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult> {
        let url = strip_prefix(api.api_url(), &response.url)?;

        let cursor = lookup_path(body, &self.cursor_key).and_then(link_token);
        let links: Links = match &cursor {
            Some(cursor) => self
                .links
                .iter()
                .map(|(rel, param)| (*rel, modify_query(url, param, Some(cursor))))
                .collect(),
            None => Links::new(),
        };

        let page = locate_page(body, self.page_key.as_deref())?;
        let total_count = resolve_total(&links, page.len(), || {
            read_total(body, self.total_key.as_deref())
        });

        debug!(
            "Cursor page: {} items, cursor {:?}, total {}",
            page.len(),
            cursor,
            total_count
        );
        Ok(PaginationResult::new(page, total_count, links))
    }
}

// ============================================================================
// Link Header Pagination
// ============================================================================

/// Link header pagination (RFC 5988)
///
/// Links come from the response's `Link` header; the body is the item list.
/// Common in GitHub, GitLab APIs.
/// Format: `Link: <https://api.github.com/...?page=2>; rel="next", ...`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderLinksPaginator {
    /// Header carrying the total item count (e.g., `X-Total`)
    #[serde(default)]
    pub total_header: Option<String>,
}

impl HeaderLinksPaginator {
    /// Create a new link header paginator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header carrying the total item count
    #[must_use]
    pub fn with_total_header(mut self, header: impl Into<String>) -> Self {
        self.total_header = Some(header.into());
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        require_optional_non_empty("total_header", self.total_header.as_deref())
    }

    fn header_total(&self, response: &ResponseContext) -> Option<i64> {
        let name = self.total_header.as_deref()?;
        let raw = response.header(name)?;
        match raw.trim().parse::<i64>() {
            Ok(total) if total >= 0 => Some(total),
            _ => {
                warn!("Ignoring unusable {} header: '{}'", name, raw);
                None
            }
        }
    }
}

impl Paginator for HeaderLinksPaginator {
    fn paginate(
        &self,
        api: &ApiContext,
        response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult> {
        let base = api.base_for(&response.url)?;

        let mut links = Links::new();
        for rel in Relation::ALL {
            if let Some(absolute) = response.links.get(rel.as_str()) {
                links.insert(rel, strip_prefix(&base, absolute)?.to_string());
            }
        }

        let page = body
            .as_array()
            .cloned()
            .ok_or_else(|| Error::invalid_page("<body>", "expected a list"))?;

        // An explicit total header wins over both fallbacks
        let total_count = self
            .header_total(response)
            .unwrap_or_else(|| resolve_total(&links, page.len(), || UNKNOWN_TOTAL));

        debug!(
            "Link header page: {} items, total {}, {} links",
            page.len(),
            total_count,
            links.len()
        );
        Ok(PaginationResult::new(page, total_count, links))
    }
}

// ============================================================================
// Body Keys Pagination
// ============================================================================

/// Absolute URLs in the body (e.g., Bitbucket `values` / `next`)
///
/// Links are read from the body, optionally from a nested paging
/// container, and made relative to the API base.
/// Common patterns:
/// - `{ "values": [...], "next": "https://api.bitbucket.org/2.0/...?page=2" }`
/// - `{ "data": [...], "paging": { "next": "https://graph.example.com/..." } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeysPaginator {
    /// Body field holding the items
    pub page_key: String,
    /// Body field of the nested paging container (top level when unset)
    #[serde(default)]
    pub paging_key: Option<String>,
    /// Container field holding the total count
    #[serde(default)]
    pub total_key: Option<String>,
    /// Relation → container field, for relations not named as-is
    #[serde(default)]
    pub links: BTreeMap<Relation, String>,
}

impl KeysPaginator {
    /// Create a new body keys paginator
    pub fn new(page_key: impl Into<String>) -> Self {
        Self {
            page_key: page_key.into(),
            paging_key: None,
            total_key: None,
            links: BTreeMap::new(),
        }
    }

    /// Set the nested paging container field
    #[must_use]
    pub fn with_paging_key(mut self, key: impl Into<String>) -> Self {
        self.paging_key = Some(key.into());
        self
    }

    /// Set the container field holding the total count
    #[must_use]
    pub fn with_total_key(mut self, key: impl Into<String>) -> Self {
        self.total_key = Some(key.into());
        self
    }

    /// Read a relation from a differently named container field
    #[must_use]
    pub fn with_link(mut self, rel: Relation, field: impl Into<String>) -> Self {
        self.links.insert(rel, field.into());
        self
    }

    /// Container field holding a relation's URL
    pub fn field_for(&self, rel: Relation) -> &str {
        self.links.get(&rel).map_or(rel.as_str(), String::as_str)
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        require_non_empty("page_key", &self.page_key)?;
        require_optional_non_empty("paging_key", self.paging_key.as_deref())?;
        for field in self.links.values() {
            require_non_empty("links", field)?;
        }
        Ok(())
    }
}

impl Paginator for KeysPaginator {
    fn paginate(
        &self,
        api: &ApiContext,
        _response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult> {
        let page = locate_page(body, Some(&self.page_key))?;

        let paging = match &self.paging_key {
            Some(key) => body.get(key).unwrap_or(&NO_PAGING),
            None => body,
        };

        let mut links = Links::new();
        for rel in Relation::ALL {
            let url = paging
                .get(self.field_for(rel))
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty());
            if let Some(url) = url {
                links.insert(rel, strip_prefix(api.api_url(), url)?.to_string());
            }
        }

        let total_count = resolve_total(&links, page.len(), || {
            read_total(paging, self.total_key.as_deref())
        });

        debug!(
            "Keys page: {} items, total {}, {} links",
            page.len(),
            total_count,
            links.len()
        );
        Ok(PaginationResult::new(page, total_count, links))
    }
}

// ============================================================================
// Configuration Helpers
// ============================================================================

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::config(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_optional_non_empty(field: &str, value: Option<&str>) -> Result<()> {
    value.map_or(Ok(()), |v| require_non_empty(field, v))
}

fn require_links(links: &BTreeMap<Relation, String>) -> Result<()> {
    if links.is_empty() {
        return Err(Error::config("links must map at least one relation"));
    }
    for value in links.values() {
        require_non_empty("links", value)?;
    }
    Ok(())
}

/// Accept either a single key or a list of keys
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(key) => vec![key],
        OneOrMany::Many(keys) => keys,
    })
}
