#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # page-links
//!
//! Normalizes third-party API pagination into one shape: the items of a
//! page, a total count (`-1` when unknown) and `prev`/`next`/`first`/`last`
//! links relative to the API base URL.
//!
//! ## Features
//!
//! - **Query parameter tokens**: `?pageToken=...` built from body tokens
//! - **Cursors**: one nested cursor shared by every configured relation
//! - **Link headers**: RFC 5988, with host-templated base URLs
//! - **Body keys**: absolute URLs in the body or a nested paging container
//!
//! ## Quick Start
//!
//! ```rust
//! use page_links::pagination::{ApiContext, KeysPaginator, Paginator, ResponseContext};
//! use serde_json::json;
//!
//! let paginator = KeysPaginator::new("values").with_paging_key("paging");
//! let api = ApiContext::new("https://api.example.com");
//! let response = ResponseContext::new("https://api.example.com/v2/page1");
//! let body = json!({
//!     "values": [1, 2, 3],
//!     "paging": {"next": "https://api.example.com/v2/page2"}
//! });
//!
//! let result = paginator.paginate(&api, &response, &body)?;
//! assert_eq!(result.next(), Some("/v2/page2"));
//! assert_eq!(result.total_count, -1);
//! # Ok::<(), page_links::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │   paginate(api, response, body) → PaginationResult           │
//! │   { page, total_count, links: {prev, next, first, last} }    │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┼──────────────┬───────────────┐
//! │ QueryParam   │ Cursor       │ HeaderLinks  │ Keys          │
//! ├──────────────┴──────────────┴──────────────┴───────────────┤
//! │ urls: modify_query, strip_prefix    http: Link header      │
//! └────────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error and relation variants before publishing

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query string and prefix helpers
pub mod urls;

/// Link header parsing and HTTP client
pub mod http;

/// Pagination strategies
pub mod pagination;

/// YAML loader for endpoint definitions
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use loader::{load_endpoint, load_endpoint_from_str, EndpointDefinition};
pub use pagination::{ApiContext, PaginationConfig, PaginationResult, Paginator, ResponseContext};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
