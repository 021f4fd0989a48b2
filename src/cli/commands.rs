//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Normalize API pagination into pages, totals and links
#[derive(Parser, Debug)]
#[command(name = "page-links")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Endpoint definition file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub endpoint: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Paginate a saved response body
    Inspect {
        /// URL the response was requested from
        #[arg(long)]
        url: String,

        /// Response body file (JSON)
        #[arg(long)]
        body: PathBuf,

        /// Response header, as `Name: value` (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Raw `Link` header value (repeatable)
        #[arg(long = "link-header")]
        link_headers: Vec<String>,
    },

    /// Fetch pages, following `next` links
    Walk {
        /// URL of the first page
        #[arg(long)]
        url: String,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<usize>,
    },

    /// Validate the endpoint definition
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one result per line)
    Json,
    /// Indented JSON
    Pretty,
}
