//! Loader types
//!
//! Declarative endpoint definition types for YAML parsing.

use crate::pagination::{ApiContext, PaginationConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level endpoint definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct EndpointDefinition {
    /// Endpoint name
    pub name: String,
    /// Base URL links are made relative to; may contain `{domain}`
    pub api_url: String,
    /// Pagination strategy
    pub pagination: PaginationConfig,
    /// Headers sent with every request when walking pages
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl EndpointDefinition {
    /// Caller context for the paginator
    pub fn api_context(&self) -> ApiContext {
        ApiContext::new(&self.api_url)
    }
}
