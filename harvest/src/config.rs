//! Configuration for a harvest run.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::InvalidConfigError;

/// Placeholder substituted with the page index in the listing URL template.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Substitutes `page` into a listing URL template.
#[must_use]
pub fn expand_page_url(template: &str, page: u32) -> String {
    template.replace(PAGE_PLACEHOLDER, &page.to_string())
}

/// Configuration for harvesting both catalogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarvestConfig {
    /// URL of the (single page) standards catalog.
    #[serde(default = "default_standards_url")]
    pub standards_url: String,
    /// URL template of the paginated apprenticeship listing.
    ///
    /// Must contain `{page}`, which is replaced with a 1-based page index.
    #[serde(default = "default_apprenticeships_page_url")]
    pub apprenticeships_page_url: String,
    /// Number of consecutive pages handed to each fetch worker.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Per-document fetch timeout in seconds. `None` waits indefinitely.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: Option<f64>,
    /// Upper bound on workers fetching at the same time. `None` runs every
    /// batch at once.
    #[serde(default)]
    pub max_concurrent_workers: Option<usize>,
    /// User agent sent with each request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_standards_url() -> String {
    "https://www.instituteforapprenticeships.org/apprenticeship-standards/".to_string()
}

fn default_apprenticeships_page_url() -> String {
    "https://findapprenticeshiptraining.sfa.bis.gov.uk/Apprenticeship/SearchResults?page={page}&order=1"
        .to_string()
}

fn default_batch_size() -> usize {
    3
}

#[allow(clippy::unnecessary_wraps)]
fn default_fetch_timeout() -> Option<f64> {
    Some(30.0)
}

fn default_user_agent() -> String {
    concat!("harvest/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            standards_url: default_standards_url(),
            apprenticeships_page_url: default_apprenticeships_page_url(),
            batch_size: default_batch_size(),
            fetch_timeout_seconds: default_fetch_timeout(),
            max_concurrent_workers: None,
            user_agent: default_user_agent(),
        }
    }
}

impl HarvestConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the standards catalog URL.
    #[must_use]
    pub fn with_standards_url(mut self, url: impl Into<String>) -> Self {
        self.standards_url = url.into();
        self
    }

    /// Sets the listing URL template.
    #[must_use]
    pub fn with_apprenticeships_page_url(mut self, template: impl Into<String>) -> Self {
        self.apprenticeships_page_url = template.into();
        self
    }

    /// Sets the batch size.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, seconds: Option<f64>) -> Self {
        self.fetch_timeout_seconds = seconds;
        self
    }

    /// Caps the number of simultaneously running workers.
    #[must_use]
    pub fn with_max_concurrent_workers(mut self, max: usize) -> Self {
        self.max_concurrent_workers = Some(max);
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Gets the fetch timeout as a Duration. Invalid values read as no timeout.
    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_seconds
            .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Builds the URL of a listing page.
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        expand_page_url(&self.apprenticeships_page_url, page)
    }

    /// Checks every setting the pipeline depends on.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.batch_size == 0 {
            return Err(InvalidConfigError::new("batch_size", "must be at least 1"));
        }
        if !self.apprenticeships_page_url.contains(PAGE_PLACEHOLDER) {
            return Err(InvalidConfigError::new(
                "apprenticeships_page_url",
                format!("template must contain '{PAGE_PLACEHOLDER}'"),
            ));
        }
        if let Some(seconds) = self.fetch_timeout_seconds {
            if !seconds.is_finite() || seconds <= 0.0 {
                return Err(InvalidConfigError::new(
                    "fetch_timeout_seconds",
                    format!("must be a positive number of seconds, got {seconds}"),
                ));
            }
        }
        if self.max_concurrent_workers == Some(0) {
            return Err(InvalidConfigError::new(
                "max_concurrent_workers",
                "must be at least 1 when set",
            ));
        }
        Ok(())
    }
}
