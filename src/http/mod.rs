//! HTTP plumbing around the pagination core
//!
//! The paginators never perform I/O themselves. This module holds the
//! pieces a transport needs to feed them:
//!
//! - **Link header parsing**: RFC 5988 `Link` headers to relation → URL pairs
//! - **Client**: a thin reqwest wrapper used by the CLI page walker

mod client;
mod link_header;

pub use client::{HttpClient, HttpClientConfig};
pub use link_header::parse_link_header;

#[cfg(test)]
mod tests;
