//! Pagination module
//!
//! Supports: Query parameter tokens, Cursor, Link Header, Body Keys
//!
//! # Overview
//!
//! Every provider paginates differently. Each strategy takes the caller's
//! [`ApiContext`], the [`ResponseContext`] of one response and its parsed
//! body, and returns the same [`PaginationResult`]: the page items, the
//! total count (`-1` when unknown) and relative `prev`/`next`/`first`/`last`
//! links.
//!
//! When a strategy finds no links at all, the page is taken to be the whole
//! result set and its length becomes the total.

mod config;
mod strategies;
mod types;

pub use config::PaginationConfig;
pub use strategies::{CursorPaginator, HeaderLinksPaginator, KeysPaginator, QueryParamPaginator};
pub use types::{ApiContext, PaginationResult, Paginator, ResponseContext, DOMAIN_PLACEHOLDER};
