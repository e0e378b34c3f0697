//! HTTP client for the upstream exchange rate API.

use async_trait::async_trait;
use bytes::Bytes;
use hryvnia_types::RateRecord;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::{RateSource, url::BASE_URL};

/// Configuration for the rate client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint that per-date queries are appended to.
    pub base_url: String,
    /// Maximum concurrent requests for one aggregation.
    pub concurrency: usize,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            concurrency: 10, // One request per date of the largest window
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("hryvnia/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching one record.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure (connect, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK.
    #[error("Unexpected status: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not a well-formed rate record.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Pooled HTTP client for the exchange rate API.
#[derive(Debug, Clone)]
pub struct RateClient {
    client: Client,
    config: ClientConfig,
}

impl RateClient {
    /// Creates a new rate client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues the GET request and parses a 200 response body.
    async fn request(&self, url: &str) -> Result<RateRecord, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body: Bytes = response.bytes().await?;
        debug!(url, bytes = body.len(), "received exchange rates");
        Ok(RateRecord::from_slice(&body)?)
    }
}

#[async_trait]
impl RateSource for RateClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn fetch(&self, url: &str) -> Result<RateRecord, FetchError> {
        let result = self.request(url).await;
        match &result {
            Ok(_) => {}
            Err(FetchError::Status { status }) => {
                error!(status, url, "error status from exchange rate API");
            }
            Err(FetchError::Http(e)) => {
                error!(url, error = %e, "connection error");
            }
            Err(FetchError::Malformed(e)) => {
                warn!(url, error = %e, "malformed exchange rate response");
            }
        }
        result
    }
}
