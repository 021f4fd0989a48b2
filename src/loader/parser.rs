//! YAML parser for endpoint definitions
//!
//! Parses and validates endpoint YAML files. JSON is valid YAML, so JSON
//! definitions load through the same path.

use crate::error::{Error, Result};
use crate::loader::types::EndpointDefinition;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load an endpoint definition from a file path
pub fn load_endpoint(path: impl AsRef<Path>) -> Result<EndpointDefinition> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read endpoint file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_endpoint_from_str(&content)
}

/// Load an endpoint definition from a YAML string
pub fn load_endpoint_from_str(yaml: &str) -> Result<EndpointDefinition> {
    let def: EndpointDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse endpoint YAML: {e}")))?;

    validate_endpoint(&def)?;
    debug!(
        "Loaded endpoint '{}' with {} pagination",
        def.name,
        def.pagination.kind()
    );
    Ok(def)
}

/// Validate an endpoint definition
fn validate_endpoint(def: &EndpointDefinition) -> Result<()> {
    if def.name.is_empty() {
        return Err(Error::config("Endpoint name cannot be empty"));
    }

    if def.api_url.is_empty() {
        return Err(Error::config("Endpoint api_url cannot be empty"));
    }

    def.pagination.validate().map_err(|e| {
        Error::config(format!(
            "Endpoint '{}' has invalid {} pagination: {}",
            def.name,
            def.pagination.kind(),
            e
        ))
    })
}
