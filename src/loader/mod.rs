//! YAML Loader module
//!
//! Parse endpoint definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `EndpointDefinition` - An API base URL bound to one pagination strategy
//! - YAML parsing with validation; unknown options are rejected at load time

mod parser;
mod types;

pub use parser::{load_endpoint, load_endpoint_from_str};
pub use types::EndpointDefinition;
