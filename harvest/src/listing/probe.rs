//! Discovery of the listing's page count.

use tracing::info;

use super::source::ListingSource;
use crate::catalog::layout;
use crate::document::{FieldExtractor, RawDocument};
use crate::errors::{ParseError, Result};

/// Reads the declared page total from the first listing page.
#[derive(Debug, Clone)]
pub struct PageCountProbe {
    source: ListingSource,
}

impl PageCountProbe {
    /// Creates a probe over `source`.
    #[must_use]
    pub fn new(source: ListingSource) -> Self {
        Self { source }
    }

    /// Fetches page 1 once and returns the total number of pages.
    ///
    /// There is no retry: a failed probe leaves nothing to batch.
    pub async fn count_pages(&self) -> Result<u32> {
        let doc = self.source.fetch_page(1).await?;
        let pages = parse_page_count(self.source.extractor(), &doc)?;
        info!(url = %doc.url, pages, "Discovered listing page count");
        Ok(pages)
    }
}

/// Parses the last token of the page counter, e.g. `45` from `Page 1 of 45`.
pub fn parse_page_count(
    extractor: &dyn FieldExtractor,
    doc: &RawDocument,
) -> std::result::Result<u32, ParseError> {
    let counter = extractor.first_text(doc, &layout::page_counter(), "page_count")?;
    let last = counter
        .split_whitespace()
        .last()
        .ok_or_else(|| ParseError::malformed("page_count", "a page total", counter.as_str()))?;
    last.parse()
        .map_err(|_| ParseError::malformed("page_count", "an integer page total", counter.trim()))
}

#[cfg(all(test, feature = "html"))]
mod tests {
    use super::*;
    use crate::document::{MockDocumentFetcher, ScraperExtractor};
    use crate::errors::FetchError;
    use crate::testing::{listing_page, StaticFetcher};
    use std::sync::Arc;

    const TEMPLATE: &str = "https://example.com/list?page={page}";

    fn probe(fetcher: impl crate::document::DocumentFetcher + 'static) -> PageCountProbe {
        PageCountProbe::new(ListingSource::new(
            Arc::new(fetcher),
            Arc::new(ScraperExtractor),
            TEMPLATE,
        ))
    }

    #[tokio::test]
    async fn test_reads_total_from_first_page() {
        let fetcher = Arc::new(
            StaticFetcher::new()
                .with_document("https://example.com/list?page=1", listing_page(1, 45, &[])),
        );
        let probe = PageCountProbe::new(ListingSource::new(
            fetcher.clone(),
            Arc::new(ScraperExtractor),
            TEMPLATE,
        ));

        assert_eq!(probe.count_pages().await.unwrap(), 45);
        assert_eq!(fetcher.requests(), vec!["https://example.com/list?page=1"]);
    }

    #[tokio::test]
    async fn test_missing_counter_is_parse_error() {
        let fetcher = StaticFetcher::new()
            .with_document("https://example.com/list?page=1", "<html><body></body></html>");
        let err = probe(fetcher).count_pages().await.unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("span.counter"));
    }

    #[tokio::test]
    async fn test_non_numeric_counter_is_parse_error() {
        let fetcher = StaticFetcher::new().with_document(
            "https://example.com/list?page=1",
            r#"<span class="counter">Page 1 of many</span>"#,
        );
        let err = probe(fetcher).count_pages().await.unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_retried() {
        let mut fetcher = MockDocumentFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|url| Err(FetchError::status(url, 503)));

        let err = probe(fetcher).count_pages().await.unwrap_err();
        assert!(err.is_fetch());
    }
}
