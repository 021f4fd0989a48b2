//! CLI module
//!
//! Command-line interface for trying endpoint definitions.
//!
//! # Commands
//!
//! - `inspect` - Paginate a saved response body offline
//! - `walk` - Fetch pages and follow `next` links
//! - `validate` - Check an endpoint definition

mod commands;
mod runner;
mod walker;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use walker::walk;
