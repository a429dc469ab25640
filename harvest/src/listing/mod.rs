//! Paginated apprenticeship listing.
//!
//! This module provides:
//! - A probe reading the listing's declared page count
//! - Partitioning of pages into contiguous batches
//! - Sequential per-batch fetch workers
//! - A pool running one worker per batch concurrently
//! - [`ApprenticeshipCollector`], which strings the above together

mod batcher;
mod pool;
mod probe;
mod source;
mod worker;

pub use batcher::{batch_pages, Batch};
pub use pool::WorkerPool;
pub use probe::{parse_page_count, PageCountProbe};
pub use source::ListingSource;
pub use worker::{parse_listing_entry, parse_listing_page, FetchWorker};

use tracing::info;

use crate::catalog::ApprenticeshipRecord;
use crate::errors::Result;

/// Collects every apprenticeship posting from the listing.
#[derive(Debug, Clone)]
pub struct ApprenticeshipCollector {
    source: ListingSource,
    batch_size: usize,
    max_concurrent: Option<usize>,
}

impl ApprenticeshipCollector {
    /// Creates a collector splitting the listing into batches of `batch_size` pages.
    #[must_use]
    pub fn new(source: ListingSource, batch_size: usize) -> Self {
        Self {
            source,
            batch_size,
            max_concurrent: None,
        }
    }

    /// Caps how many batches are fetched at the same time.
    #[must_use]
    pub fn with_max_concurrent(mut self, max: Option<usize>) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Probes the page count, batches the pages and runs the pool.
    ///
    /// The result is in page order, then in on-page order.
    pub async fn collect(&self) -> Result<Vec<ApprenticeshipRecord>> {
        let total_pages = PageCountProbe::new(self.source.clone()).count_pages().await?;
        let batches = batch_pages(total_pages, self.batch_size)?;
        info!(
            total_pages,
            batches = batches.len(),
            batch_size = self.batch_size,
            "Fetching apprenticeship listing"
        );

        let records = WorkerPool::new(self.source.clone())
            .with_max_concurrent(self.max_concurrent)
            .run_concurrent(batches)
            .await?;
        info!(count = records.len(), "Collected apprenticeships");
        Ok(records)
    }
}
