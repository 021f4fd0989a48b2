//! Strategy selection
//!
//! One endpoint uses exactly one pagination convention, chosen by the `type`
//! tag of its definition and fixed for the lifetime of the endpoint.

use super::strategies::{CursorPaginator, HeaderLinksPaginator, KeysPaginator, QueryParamPaginator};
use super::types::{ApiContext, PaginationResult, Paginator, ResponseContext};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Configured pagination strategy of an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationConfig {
    /// Position tokens in the body, written into one query parameter
    QueryParam(QueryParamPaginator),
    /// One cursor in the body, written into per-relation query parameters
    Cursor(CursorPaginator),
    /// RFC 5988 `Link` header
    HeaderLinks(HeaderLinksPaginator),
    /// Absolute URLs in the body
    Keys(KeysPaginator),
}

impl PaginationConfig {
    /// Strategy name as written in endpoint definitions
    pub fn kind(&self) -> &'static str {
        match self {
            Self::QueryParam(_) => "query_param",
            Self::Cursor(_) => "cursor",
            Self::HeaderLinks(_) => "header_links",
            Self::Keys(_) => "keys",
        }
    }

    /// Check the strategy options
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::QueryParam(p) => p.validate(),
            Self::Cursor(p) => p.validate(),
            Self::HeaderLinks(p) => p.validate(),
            Self::Keys(p) => p.validate(),
        }
    }

    fn as_paginator(&self) -> &dyn Paginator {
        match self {
            Self::QueryParam(p) => p,
            Self::Cursor(p) => p,
            Self::HeaderLinks(p) => p,
            Self::Keys(p) => p,
        }
    }
}

impl Paginator for PaginationConfig {
    fn paginate(
        &self,
        api: &ApiContext,
        response: &ResponseContext,
        body: &Value,
    ) -> Result<PaginationResult> {
        self.as_paginator().paginate(api, response, body)
    }
}

impl From<QueryParamPaginator> for PaginationConfig {
    fn from(p: QueryParamPaginator) -> Self {
        Self::QueryParam(p)
    }
}

impl From<CursorPaginator> for PaginationConfig {
    fn from(p: CursorPaginator) -> Self {
        Self::Cursor(p)
    }
}

impl From<HeaderLinksPaginator> for PaginationConfig {
    fn from(p: HeaderLinksPaginator) -> Self {
        Self::HeaderLinks(p)
    }
}

impl From<KeysPaginator> for PaginationConfig {
    fn from(p: KeysPaginator) -> Self {
        Self::Keys(p)
    }
}
