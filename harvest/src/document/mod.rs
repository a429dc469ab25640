//! Document retrieval and field extraction.
//!
//! This module provides:
//! - The [`DocumentFetcher`] and [`FieldExtractor`] capabilities the core consumes
//! - [`ScraperExtractor`], an HTML implementation of [`FieldExtractor`] (feature `html`)
//! - [`HttpFetcher`], an HTTP implementation of [`DocumentFetcher`] (feature `http`)
//! - [`fetch_with_timeout`], which puts an explicit deadline on a fetch

#[cfg(feature = "html")]
mod html;
#[cfg(feature = "http")]
mod http;
mod protocols;

use std::time::Duration;
use tokio::time::timeout;

#[cfg(feature = "html")]
pub use html::ScraperExtractor;
#[cfg(feature = "http")]
pub use http::HttpFetcher;
#[cfg(test)]
pub use protocols::MockDocumentFetcher;
pub use protocols::{DocumentFetcher, ElementQuery, FieldExtractor, RawDocument};

use crate::errors::FetchError;

/// Fetches `url`, failing with a [`FetchError`] if `deadline` elapses first.
///
/// With no deadline the fetch may block indefinitely.
pub async fn fetch_with_timeout(
    fetcher: &dyn DocumentFetcher,
    url: &str,
    deadline: Option<Duration>,
) -> Result<RawDocument, FetchError> {
    match deadline {
        Some(duration) => match timeout(duration, fetcher.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::timed_out(url, duration)),
        },
        None => fetcher.fetch(url).await,
    }
}
