//! The network seam.
//!
//! Discovery consumes the page/network driver through the [`Fetcher`]
//! trait so adapters stay testable without a network. The production
//! implementation is a thin reqwest wrapper; timeouts and cancellation
//! live here, not in the adapters.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

/// Default per-request timeout, matching the bound the board APIs are
/// known to answer within.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("response body was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Capability to fetch a JSON document or an HTML page from a URL.
///
/// Every failure is a value, never a panic: adapters decide whether to
/// recover (zero postings for that source) or propagate.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;

    async fn get_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Production fetcher backed by a single shared reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("jobscout/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fetcher for adapter tests: URLs map to canned bodies,
    //! anything unmapped answers 404.

    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    pub(crate) struct StaticFetcher {
        json: HashMap<String, Value>,
        html: HashMap<String, String>,
    }

    impl StaticFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_json(mut self, url: &str, body: Value) -> Self {
            self.json.insert(url.to_string(), body);
            self
        }

        pub(crate) fn with_html(mut self, url: &str, body: &str) -> Self {
            self.html.insert(url.to_string(), body.to_string());
            self
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
            self.json.get(url).cloned().ok_or(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }

        async fn get_html(&self, url: &str) -> Result<String, FetchError> {
            self.html.get(url).cloned().ok_or(FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }
}
