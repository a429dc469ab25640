//! One-call harvest of both catalogs.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::catalog::{ApprenticeshipRecord, StandardRecord};
use crate::config::HarvestConfig;
use crate::document::{DocumentFetcher, FieldExtractor};
use crate::errors::Result;
use crate::listing::{ApprenticeshipCollector, ListingSource};
use crate::reconcile::{reconcile, MergedRecord, Stats};
use crate::standards::StandardsCollector;

/// Everything produced by one [`Harvester::run`].
#[derive(Debug, Clone, Serialize)]
pub struct HarvestOutcome {
    /// Identifier of the run, attached to its log span.
    pub run_id: Uuid,
    /// When collection started.
    pub started_at: DateTime<Utc>,
    /// When reconciliation finished.
    pub finished_at: DateTime<Utc>,
    /// Approved standards, in page order.
    pub standards: Vec<StandardRecord>,
    /// Apprenticeship postings, in page order.
    pub apprenticeships: Vec<ApprenticeshipRecord>,
    /// The outer-joined dataset.
    pub merged: Vec<MergedRecord>,
    /// Coverage counts for `merged`.
    pub stats: Stats,
}

/// Entry point tying the collectors and the reconciler to one configuration.
pub struct Harvester {
    config: HarvestConfig,
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn FieldExtractor>,
}

impl Harvester {
    /// Creates a harvester after validating `config`.
    pub fn new(
        config: HarvestConfig,
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn FieldExtractor>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fetcher,
            extractor,
        })
    }

    /// The validated configuration.
    #[must_use]
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Collects the approved standards.
    pub async fn collect_standards(&self) -> Result<Vec<StandardRecord>> {
        StandardsCollector::new(
            self.fetcher.clone(),
            self.extractor.clone(),
            self.config.standards_url.clone(),
        )
        .with_fetch_timeout(self.config.fetch_timeout())
        .collect()
        .await
    }

    /// Collects every apprenticeship posting using batches of `batch_size` pages.
    pub async fn collect_apprenticeships(
        &self,
        batch_size: usize,
    ) -> Result<Vec<ApprenticeshipRecord>> {
        let source =
            ListingSource::from_config(self.fetcher.clone(), self.extractor.clone(), &self.config);
        ApprenticeshipCollector::new(source, batch_size)
            .with_max_concurrent(self.config.max_concurrent_workers)
            .collect()
            .await
    }

    /// Outer-joins the two collections.
    #[must_use]
    pub fn reconcile(
        &self,
        standards: &[StandardRecord],
        apprenticeships: &[ApprenticeshipRecord],
    ) -> (Vec<MergedRecord>, Stats) {
        reconcile(standards, apprenticeships)
    }

    /// Collects both catalogs concurrently, then reconciles them.
    ///
    /// Fails with the first collection error; no partial outcome is returned.
    pub async fn run(&self) -> Result<HarvestOutcome> {
        let run_id = Uuid::new_v4();
        let span = info_span!("harvest", %run_id);
        async move {
            let started_at = Utc::now();
            info!(batch_size = self.config.batch_size, "Starting harvest");

            let (standards, apprenticeships) = tokio::try_join!(
                self.collect_standards(),
                self.collect_apprenticeships(self.config.batch_size),
            )?;
            let (merged, stats) = self.reconcile(&standards, &apprenticeships);

            let finished_at = Utc::now();
            info!(
                standards = standards.len(),
                apprenticeships = apprenticeships.len(),
                merged = merged.len(),
                elapsed_ms = (finished_at - started_at).num_milliseconds(),
                "Harvest complete"
            );
            Ok(HarvestOutcome {
                run_id,
                started_at,
                finished_at,
                standards,
                apprenticeships,
                merged,
                stats,
            })
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for Harvester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harvester")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
