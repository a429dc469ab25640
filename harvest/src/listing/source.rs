//! Shared handle on the paginated listing.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{expand_page_url, HarvestConfig};
use crate::document::{fetch_with_timeout, DocumentFetcher, FieldExtractor, RawDocument};
use crate::errors::FetchError;

/// Everything a probe or worker needs to read listing pages.
///
/// Cloning is cheap; clones share the fetcher and extractor.
#[derive(Clone)]
pub struct ListingSource {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn FieldExtractor>,
    url_template: Arc<str>,
    fetch_timeout: Option<Duration>,
}

impl ListingSource {
    /// Creates a source for pages built from `url_template`.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn FieldExtractor>,
        url_template: &str,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            url_template: Arc::from(url_template),
            fetch_timeout: None,
        }
    }

    /// Creates a source from the listing settings in `config`.
    #[must_use]
    pub fn from_config(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn FieldExtractor>,
        config: &HarvestConfig,
    ) -> Self {
        Self::new(fetcher, extractor, &config.apprenticeships_page_url)
            .with_fetch_timeout(config.fetch_timeout())
    }

    /// Sets the per-page fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// URL of the 1-based `page`.
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        expand_page_url(&self.url_template, page)
    }

    /// The field extractor.
    #[must_use]
    pub fn extractor(&self) -> &dyn FieldExtractor {
        self.extractor.as_ref()
    }

    /// Fetches one listing page.
    pub async fn fetch_page(&self, page: u32) -> Result<RawDocument, FetchError> {
        let url = self.page_url(page);
        fetch_with_timeout(self.fetcher.as_ref(), &url, self.fetch_timeout).await
    }
}

impl std::fmt::Debug for ListingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingSource")
            .field("url_template", &self.url_template)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}
