//! # Harvest
//!
//! Concurrent harvesting and reconciliation of apprenticeship catalogs.
//!
//! Harvest reads two public catalogs and joins them:
//!
//! - **Standards**: a single page of approved apprenticeship standards
//! - **Apprenticeships**: a paginated listing, fetched in concurrent batches
//! - **Reconciliation**: a full outer join on normalized title, level and
//!   duration, with counts of matched, unmatched and duplicate rows
//!
//! Fetching and field extraction sit behind the [`DocumentFetcher`] and
//! [`FieldExtractor`] traits so either catalog can be served from memory.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use harvest::prelude::*;
//! use std::sync::Arc;
//!
//! let config = HarvestConfig::default().with_batch_size(4);
//! let fetcher = Arc::new(HttpFetcher::new(&config)?);
//! let harvester = Harvester::new(config, fetcher, Arc::new(ScraperExtractor))?;
//!
//! let outcome = harvester.run().await?;
//! println!("{} merged rows", outcome.stats.total_rows);
//! ```
//!
//! [`DocumentFetcher`]: document::DocumentFetcher
//! [`FieldExtractor`]: document::FieldExtractor

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod catalog;
pub mod config;
pub mod document;
pub mod errors;
pub mod harvester;
pub mod listing;
pub mod reconcile;
pub mod standards;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{
        normalize_title, ApprenticeshipRecord, JoinKey, NormalizedKey, StandardRecord,
    };
    pub use crate::config::HarvestConfig;
    #[cfg(feature = "http")]
    pub use crate::document::HttpFetcher;
    #[cfg(feature = "html")]
    pub use crate::document::ScraperExtractor;
    pub use crate::document::{DocumentFetcher, ElementQuery, FieldExtractor, RawDocument};
    pub use crate::errors::{
        FetchError, HarvestError, InvalidConfigError, ParseError, Result,
    };
    pub use crate::harvester::{HarvestOutcome, Harvester};
    pub use crate::listing::{
        batch_pages, ApprenticeshipCollector, FetchWorker, ListingSource, PageCountProbe,
        WorkerPool,
    };
    pub use crate::reconcile::{reconcile, MergedRecord, Stats};
    pub use crate::standards::StandardsCollector;
}

/// Version of the harvest library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
