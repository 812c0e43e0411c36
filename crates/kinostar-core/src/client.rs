//! HTTP client for kinostar86.ru
//!
//! This module provides the page fetcher used by the scraper. Requests are
//! made one at a time and are never retried; a failed request fails the
//! extraction run that issued it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Url;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{KinostarError, Result};

/// Source of raw HTML pages for the scraper.
///
/// Implementors only need to fetch absolute URLs and expose the site root;
/// relative links found in pages are resolved against that root.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Site root; also the address of the listing page.
    fn base_url(&self) -> &Url;

    /// Fetch the HTML body behind `url`.
    async fn fetch(&self, url: &Url) -> Result<String>;

    /// Resolve a link found in a page to an absolute URL.
    ///
    /// Absolute links are returned unchanged.
    fn resolve(&self, href: &str) -> Result<Url> {
        self.base_url()
            .join(href)
            .map_err(|e| KinostarError::InvalidUrl(format!("{}: {}", href, e)))
    }
}

/// HTTP client for kinostar86.ru
///
/// Sends a browser User-Agent and a Russian Accept-Language header and
/// applies the configured request timeout.
pub struct KinostarClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    base_url: Url,
}

impl KinostarClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// - `KinostarError::InvalidUrl` - `base_url` is not an absolute URL
    /// - `KinostarError::InvalidConfig` - a header value is not valid
    /// - `KinostarError::Http` - the TLS backend could not be initialised
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| KinostarError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language).map_err(|_| {
                KinostarError::InvalidConfig(format!(
                    "accept_language {:?} is not a valid header value",
                    config.accept_language
                ))
            })?,
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PageSource for KinostarClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// # Errors
    /// - `KinostarError::Http` - network error or unreadable body
    /// - `KinostarError::HttpStatus` - server returned a non-2xx status
    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!(%url, "fetching page");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(KinostarError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
