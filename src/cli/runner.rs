//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::walker::walk;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig};
use crate::loader::{load_endpoint, EndpointDefinition};
use crate::pagination::{PaginationResult, Paginator, ResponseContext};
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Inspect {
                url,
                body,
                headers,
                link_headers,
            } => self.inspect(url, body, headers, link_headers),
            Commands::Walk { url, max_pages } => self.walk(url, *max_pages).await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load endpoint definition
    fn load_endpoint(&self) -> Result<EndpointDefinition> {
        let path = self
            .cli
            .endpoint
            .as_ref()
            .ok_or_else(|| Error::config("Endpoint file not specified (use -e flag)"))?;
        load_endpoint(path)
    }

    /// Paginate a saved response
    fn inspect(
        &self,
        url: &str,
        body_path: &Path,
        headers: &[String],
        link_headers: &[String],
    ) -> Result<()> {
        let endpoint = self.load_endpoint()?;

        let content = fs::read_to_string(body_path)
            .with_context(|| format!("Failed to read body file '{}'", body_path.display()))?;
        let body: Value = serde_json::from_str(&content)?;

        let mut response = ResponseContext::new(url);
        for raw in headers {
            let (name, value) = parse_header_arg(raw)?;
            response = response.with_header(name, value);
        }
        for raw in link_headers {
            response = response.with_link_header(raw);
        }

        let result = endpoint
            .pagination
            .paginate(&endpoint.api_context(), &response, &body)?;
        self.output(&result);
        Ok(())
    }

    /// Fetch and print pages
    async fn walk(&self, url: &str, max_pages: Option<usize>) -> Result<()> {
        let endpoint = self.load_endpoint()?;

        let mut config = HttpClientConfig::default();
        for (key, value) in &endpoint.headers {
            config = config.header(key, value);
        }
        let client = HttpClient::with_config(config)?;

        walk(&client, &endpoint, url, max_pages, |page: &PaginationResult| {
            self.output(page);
            Ok(())
        })
        .await?;
        Ok(())
    }

    /// Validate endpoint definition
    fn validate(&self) -> Result<()> {
        let endpoint = self.load_endpoint()?;

        self.output(&json!({
            "endpoint": endpoint.name,
            "api_url": endpoint.api_url,
            "pagination": endpoint.pagination,
            "valid": true
        }));

        Ok(())
    }

    /// Output a message
    fn output<T: Serialize>(&self, msg: &T) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Parse a `Name: value` header argument
fn parse_header_arg(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| Error::config(format!("Header '{raw}' must look like 'Name: value'")))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| Error::config(format!("Invalid header name in '{raw}': {e}")))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| Error::config(format!("Invalid header value in '{raw}': {e}")))?;
    Ok((name, value))
}
