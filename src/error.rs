//! Error types for page-links
//!
//! Pagination itself only fails for configuration-class problems: a base URL
//! that does not prefix the URLs a provider hands back, or a body whose item
//! list cannot be located. Everything else (loader, CLI) is collected here too.

use thiserror::Error;

/// The main error type for page-links
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("\"{prefix}\" is not a prefix of \"{value}\"")]
    PrefixMismatch { prefix: String, value: String },

    #[error("Expected exactly one list in the response body, found {found}")]
    AmbiguousPageLocation { found: usize },

    #[error("Invalid page at '{location}': {message}")]
    InvalidPage { location: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a prefix mismatch error
    pub fn prefix_mismatch(prefix: impl Into<String>, value: impl Into<String>) -> Self {
        Self::PrefixMismatch {
            prefix: prefix.into(),
            value: value.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPage {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Whether this error points at a wrong endpoint setup rather than a bad response
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::PrefixMismatch { .. }
                | Error::AmbiguousPageLocation { .. }
                | Error::InvalidPage { .. }
                | Error::Config { .. }
        )
    }
}

/// Result type alias for page-links
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
