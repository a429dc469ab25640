//! HTTP document retrieval backed by `reqwest`.

use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

use super::protocols::{DocumentFetcher, RawDocument};
use crate::config::HarvestConfig;
use crate::errors::{FetchError, InvalidConfigError};

/// Fetches documents over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Creates a fetcher sending the user agent from `config`.
    ///
    /// The client sets no request timeout of its own; deadlines come from
    /// [`fetch_with_timeout`](super::fetch_with_timeout).
    pub fn new(config: &HarvestConfig) -> Result<Self, InvalidConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| InvalidConfigError::new("http_client", e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<RawDocument, FetchError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::new(url, format!("failed to read body: {e}")))?;

        debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Fetched document"
        );
        Ok(RawDocument::new(url, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::fetch_with_timeout;

    #[test]
    fn test_builds_from_default_config() {
        assert!(HttpFetcher::new(&HarvestConfig::default()).is_ok());
    }

    #[test]
    fn test_builds_without_timeout() {
        let config = HarvestConfig::new().with_fetch_timeout(None);
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_stalled_server_reports_configured_deadline() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept connections and never answer.
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let config = HarvestConfig::new().with_fetch_timeout(Some(0.2));
        let fetcher = HttpFetcher::new(&config).unwrap();
        let url = format!("http://{addr}/catalog");
        let err = fetch_with_timeout(&fetcher, &url, config.fetch_timeout())
            .await
            .unwrap_err();

        assert_eq!(err.reason, "timed out after 0.2s");
        server.abort();
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let fetcher = HttpFetcher::new(&HarvestConfig::new().with_fetch_timeout(Some(2.0))).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/catalog").await.unwrap_err();
        assert_eq!(err.url, "http://127.0.0.1:9/catalog");
        assert_eq!(err.status, None);
    }
}
