//! HTTP client for PlayStation Store pages using wreq.

use crate::config::Config;
use crate::store::error::StoreError;
use crate::store::urls::{self, STORE_ORIGIN};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;

/// Trait for page fetching - enables substituting canned documents in tests.
#[async_trait]
pub trait StoreFetch: Send + Sync {
    /// Performs a single GET and returns the decoded body.
    async fn fetch(&self, url: &str) -> Result<String, StoreError>;

    /// Origin that store URLs are built against.
    fn origin(&self) -> &str {
        STORE_ORIGIN
    }
}

/// Store HTTP client. One request per call, no retries.
///
/// `Accept-Language` follows the locale segment of each requested URL, so a
/// single client serves every region.
pub struct StoreClient {
    client: Client,
    origin: String,
}

impl StoreClient {
    /// Creates a new store client with the given configuration.
    ///
    /// Fails on an unusable proxy URL or client setup; these are configuration
    /// problems, not transport failures.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_origin(config, None)
    }

    /// Creates a new store client with an optional custom origin (for testing).
    pub fn with_origin(config: &Config, origin: Option<String>) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .with_context(|| format!("Invalid proxy URL '{}'", proxy_url))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, origin: origin.unwrap_or_else(|| STORE_ORIGIN.to_string()) })
    }
}

#[async_trait]
impl StoreFetch for StoreClient {
    async fn fetch(&self, url: &str) -> Result<String, StoreError> {
        let region = urls::region_of(url);
        debug!("GET {} ({})", url, region);

        let response = self
            .client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", region.accept_language())
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Request to {} failed with status {}", url, status);
            return Err(StoreError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }

        Ok(response.text().await?)
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
