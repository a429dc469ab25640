//! Single-shot collection of the standards catalog.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::{labelled_level, layout, leading_integer, trailing_amount, StandardRecord};
use crate::document::{fetch_with_timeout, DocumentFetcher, FieldExtractor, RawDocument};
use crate::errors::{ParseError, Result};

/// Fetches the standards page and extracts every approved standard.
pub struct StandardsCollector {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn FieldExtractor>,
    url: String,
    fetch_timeout: Option<Duration>,
}

impl StandardsCollector {
    /// Creates a collector for the catalog at `url`.
    #[must_use]
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn FieldExtractor>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            url: url.into(),
            fetch_timeout: None,
        }
    }

    /// Sets the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Collects approved standards in page order.
    ///
    /// Fails on the first entry with a missing or non-numeric field.
    pub async fn collect(&self) -> Result<Vec<StandardRecord>> {
        let doc = fetch_with_timeout(self.fetcher.as_ref(), &self.url, self.fetch_timeout).await?;
        let entries = self
            .extractor
            .select_all(&doc, &layout::approved_standard())?;
        debug!(url = %self.url, entries = entries.len(), "Found approved standards");

        let standards = entries
            .iter()
            .map(|entry| parse_standard(self.extractor.as_ref(), entry))
            .collect::<std::result::Result<Vec<_>, ParseError>>()?;

        info!(url = %self.url, count = standards.len(), "Collected standards");
        Ok(standards)
    }
}

impl std::fmt::Debug for StandardsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardsCollector")
            .field("url", &self.url)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}

/// Builds a [`StandardRecord`] from one approved entry.
pub fn parse_standard(
    extractor: &dyn FieldExtractor,
    entry: &RawDocument,
) -> std::result::Result<StandardRecord, ParseError> {
    let title = extractor.first_text(entry, &layout::standard_title(), "standard.title")?;
    let level_text = extractor.first_text(entry, &layout::standard_level(), "standard.level")?;
    let duration_text =
        extractor.first_text(entry, &layout::standard_duration(), "standard.duration")?;
    let funding_text =
        extractor.first_text(entry, &layout::standard_funding(), "standard.max_funding")?;

    StandardRecord::new(
        &title,
        labelled_level(&level_text, "standard.level")?,
        leading_integer(&duration_text, "standard.duration")?,
        trailing_amount(&funding_text, "standard.max_funding")?,
    )
}
