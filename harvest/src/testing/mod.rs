//! Testing utilities for harvest pipelines.
//!
//! This module provides:
//! - An in-memory document fetcher with injectable delays and failures
//! - HTML fixtures shaped like the standards and listing catalogs

mod fixtures;
mod mocks;

pub use fixtures::{listing_page, standards_page, ListingEntry, StandardEntry};
pub use mocks::StaticFetcher;
