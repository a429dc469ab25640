//! Concurrent execution of one fetch worker per batch.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use super::batcher::Batch;
use super::source::ListingSource;
use super::worker::FetchWorker;
use crate::catalog::ApprenticeshipRecord;
use crate::errors::{HarvestError, Result};

/// Runs one task per batch and joins them all.
///
/// Workers share nothing mutable: each returns its own records and the pool
/// concatenates them in batch order, whatever order they finish in. A failed
/// worker does not cancel its siblings; the pool waits for every task and
/// then reports the failure of the lowest-indexed batch.
#[derive(Debug, Clone)]
pub struct WorkerPool {
    source: ListingSource,
    max_concurrent: Option<usize>,
}

impl WorkerPool {
    /// Creates a pool that runs every batch at once.
    #[must_use]
    pub fn new(source: ListingSource) -> Self {
        Self {
            source,
            max_concurrent: None,
        }
    }

    /// Limits how many workers fetch at the same time. `None` removes the limit.
    #[must_use]
    pub fn with_max_concurrent(mut self, max: Option<usize>) -> Self {
        self.max_concurrent = max;
        self
    }

    /// Runs every batch concurrently and returns the concatenated records.
    pub async fn run_concurrent(&self, batches: Vec<Batch>) -> Result<Vec<ApprenticeshipRecord>> {
        let limiter = self
            .max_concurrent
            .map(|max| Arc::new(Semaphore::new(max.max(1))));

        let handles: Vec<JoinHandle<Result<Vec<ApprenticeshipRecord>>>> = batches
            .into_iter()
            .enumerate()
            .map(|(index, pages)| {
                let worker = FetchWorker::new(index, self.source.clone());
                let limiter = limiter.clone();
                let span = info_span!("fetch_worker", batch = index);
                tokio::spawn(
                    async move {
                        let _permit = match limiter {
                            Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(
                                |e| HarvestError::Worker {
                                    batch: index,
                                    message: e.to_string(),
                                },
                            )?),
                            None => None,
                        };
                        worker.run(pages).await
                    }
                    .instrument(span),
                )
            })
            .collect();

        info!(
            workers = handles.len(),
            max_concurrent = ?self.max_concurrent,
            "Launched fetch workers"
        );

        let outcomes = futures::future::join_all(handles).await;

        let mut records = Vec::new();
        let mut first_error: Option<HarvestError> = None;
        for (index, outcome) in outcomes.into_iter().enumerate() {
            let result = outcome.unwrap_or_else(|join_error| {
                Err(HarvestError::Worker {
                    batch: index,
                    message: join_error.to_string(),
                })
            });
            match result {
                Ok(batch_records) => {
                    debug!(batch = index, records = batch_records.len(), "Fetch worker finished");
                    if first_error.is_none() {
                        records.extend(batch_records);
                    }
                }
                Err(error) => {
                    warn!(batch = index, kind = error.kind(), error = %error, "Fetch worker failed");
                    first_error.get_or_insert(error);
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(records),
        }
    }
}
