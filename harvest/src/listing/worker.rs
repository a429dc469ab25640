//! Sequential fetch-and-extract over one batch of listing pages.

use tracing::debug;

use super::batcher::Batch;
use super::source::ListingSource;
use crate::catalog::{layout, leading_digit_and_detail, leading_integer, ApprenticeshipRecord};
use crate::document::{FieldExtractor, RawDocument};
use crate::errors::{ParseError, Result};

/// Fetches the pages of one batch in order and extracts their postings.
#[derive(Debug, Clone)]
pub struct FetchWorker {
    batch_index: usize,
    source: ListingSource,
}

impl FetchWorker {
    /// Creates the worker for batch `batch_index`.
    #[must_use]
    pub fn new(batch_index: usize, source: ListingSource) -> Self {
        Self {
            batch_index,
            source,
        }
    }

    /// Index of the batch this worker owns.
    #[must_use]
    pub fn batch_index(&self) -> usize {
        self.batch_index
    }

    /// Processes `pages` in order.
    ///
    /// Stops at the first page that cannot be fetched or parsed; later pages
    /// of the batch are not requested.
    pub async fn run(self, pages: Batch) -> Result<Vec<ApprenticeshipRecord>> {
        let mut records = Vec::new();
        for page in pages {
            let doc = self.source.fetch_page(page).await?;
            let found = parse_listing_page(self.source.extractor(), &doc)?;
            debug!(
                batch = self.batch_index,
                page,
                postings = found.len(),
                "Extracted listing page"
            );
            records.extend(found);
        }
        Ok(records)
    }
}

/// Extracts every posting on a listing page, in page order.
pub fn parse_listing_page(
    extractor: &dyn FieldExtractor,
    doc: &RawDocument,
) -> std::result::Result<Vec<ApprenticeshipRecord>, ParseError> {
    extractor
        .select_all(doc, &layout::listing_entry())?
        .iter()
        .map(|entry| parse_listing_entry(extractor, entry))
        .collect()
}

/// Builds an [`ApprenticeshipRecord`] from one posting.
pub fn parse_listing_entry(
    extractor: &dyn FieldExtractor,
    entry: &RawDocument,
) -> std::result::Result<ApprenticeshipRecord, ParseError> {
    let title = extractor.first_text(entry, &layout::listing_title(), "apprenticeship.title")?;
    let level_text =
        extractor.nth_text(entry, &layout::listing_details(), 0, "apprenticeship.level")?;
    let duration_text =
        extractor.nth_text(entry, &layout::listing_details(), 1, "apprenticeship.duration")?;

    let (level, level_detail) = leading_digit_and_detail(&level_text, "apprenticeship.level")?;
    let duration_months = leading_integer(&duration_text, "apprenticeship.duration")?;
    ApprenticeshipRecord::new(&title, level, level_detail, duration_months)
}
