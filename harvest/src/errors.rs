//! Error types for the harvest pipeline.
//!
//! Every failure in the core falls into one of three kinds: a document could
//! not be retrieved ([`FetchError`]), a retrieved document did not have the
//! expected shape ([`ParseError`]), or the pipeline was asked to run with an
//! impossible setting ([`InvalidConfigError`]). Nothing is retried or
//! swallowed; errors travel unchanged to the caller of the operation that
//! raised them.

use std::time::Duration;
use thiserror::Error;

/// The main error type for harvest operations.
#[derive(Debug, Clone, Error)]
pub enum HarvestError {
    /// A document could not be retrieved.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// A document was retrieved but a field was missing or malformed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A configuration value is out of range.
    #[error("{0}")]
    InvalidConfig(#[from] InvalidConfigError),

    /// A worker task terminated without producing a result.
    #[error("Worker for batch {batch} failed: {message}")]
    Worker {
        /// Index of the batch the worker was assigned.
        batch: usize,
        /// Description of the failure.
        message: String,
    },
}

impl HarvestError {
    /// Short machine-friendly name of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Parse(_) => "parse",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Worker { .. } => "worker",
        }
    }

    /// Whether this is a [`FetchError`].
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Whether this is a [`ParseError`].
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Whether this is an [`InvalidConfigError`].
    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

/// Error raised when a document cannot be retrieved.
#[derive(Debug, Clone, Error)]
#[error("Failed to fetch '{url}': {reason}")]
pub struct FetchError {
    /// The URL that was requested.
    pub url: String,
    /// What went wrong.
    pub reason: String,
    /// HTTP status, when the server answered.
    pub status: Option<u16>,
}

impl FetchError {
    /// Creates a new fetch error.
    #[must_use]
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
            status: None,
        }
    }

    /// Creates a fetch error for a non-success status code.
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            reason: format!("server responded with status {status}"),
            status: Some(status),
        }
    }

    /// Creates a fetch error for a request that exceeded its deadline.
    #[must_use]
    pub fn timed_out(url: impl Into<String>, after: Duration) -> Self {
        Self::new(url, format!("timed out after {:.1}s", after.as_secs_f64()))
    }
}

/// Error raised when an expected field is absent or has the wrong shape.
#[derive(Debug, Clone, Error)]
#[error("Failed to parse {field}: {reason}")]
pub struct ParseError {
    /// The logical field being parsed (e.g. "standard.level").
    pub field: String,
    /// What went wrong.
    pub reason: String,
    /// The raw text that was rejected, if any.
    pub value: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            value: None,
        }
    }

    /// Creates an error for a selector that matched nothing.
    #[must_use]
    pub fn missing(field: impl Into<String>, selector: impl std::fmt::Display) -> Self {
        Self::new(field, format!("no element matches '{selector}'"))
    }

    /// Creates an error for text that does not have the expected shape.
    #[must_use]
    pub fn malformed(
        field: impl Into<String>,
        expected: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        Self {
            field: field.into(),
            reason: format!("expected {}, got '{}'", expected.into(), value),
            value: Some(value),
        }
    }
}

/// Error raised for configuration values the pipeline cannot honour.
#[derive(Debug, Clone, Error)]
#[error("Invalid configuration for '{setting}': {reason}")]
pub struct InvalidConfigError {
    /// The offending setting.
    pub setting: String,
    /// Why it was rejected.
    pub reason: String,
}

impl InvalidConfigError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn new(setting: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            setting: setting.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HarvestError>;
