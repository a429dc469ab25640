//! In-memory document fetcher for tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

use crate::document::{DocumentFetcher, RawDocument};
use crate::errors::FetchError;

/// A fetcher serving canned documents, with optional per-URL delays and failures.
///
/// Every request is recorded, including ones that fail.
/// Unknown URLs answer with a 404 [`FetchError`].
#[derive(Debug, Default)]
pub struct StaticFetcher {
    documents: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    failures: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    /// Creates an empty fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `url`.
    #[must_use]
    pub fn with_document(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(url.into(), body.into());
        self
    }

    /// Sleeps for `delay` before answering requests for `url`.
    #[must_use]
    pub fn with_delay(mut self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(url.into(), delay);
        self
    }

    /// Fails every request for `url`.
    #[must_use]
    pub fn with_failure(mut self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert(url.into(), reason.into());
        self
    }

    /// Returns the URLs requested so far, in request order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Returns how many times `url` was requested.
    #[must_use]
    pub fn request_count(&self, url: &str) -> usize {
        self.requests.lock().iter().filter(|u| *u == url).count()
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        self.requests.lock().push(url.to_string());

        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(reason) = self.failures.get(url) {
            return Err(FetchError::new(url, reason.clone()));
        }
        self.documents
            .get(url)
            .map(|body| RawDocument::new(url, body.clone()))
            .ok_or_else(|| FetchError::status(url, 404))
    }
}
