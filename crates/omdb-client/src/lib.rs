//! OMDb client for the movie search gateway.
//!
//! This crate provides a Rust client for the OMDb HTTP API. It handles:
//! - Building search (`?s=`) and detail (`?i=...&plot=full`) requests
//! - Decoding the JSON bodies through the catalog parser
//! - Degrading every failure to "no data" behind the `MovieGateway` trait
//!
//! The fallible `try_search` / `try_fetch` methods are public too, for
//! callers that want to report why a lookup failed.

use std::time::Duration;

use async_trait::async_trait;
use catalog::{CatalogError, MAX_RESULTS_PER_QUERY, MovieRecord, SearchHit};
use pipeline::MovieGateway;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Public OMDb endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when talking to OMDb
#[derive(Error, Debug)]
pub enum OmdbError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Connection settings for [`OmdbClient`].
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl OmdbConfig {
    /// Settings for the public endpoint with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the OMDb API.
///
/// Cheap to clone; the underlying reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    /// Build a client from its settings.
    ///
    /// No request is made here; a bad key only shows up on the first lookup.
    pub fn new(config: OmdbConfig) -> Result<Self, OmdbError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| OmdbError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder().timeout(config.timeout).build()?;

        info!("OMDb client ready for {}", base_url);
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Search titles, returning at most five hits.
    pub async fn try_search(&self, text: &str) -> Result<Vec<SearchHit>, OmdbError> {
        let body = self.get(&[("s", text)]).await?;
        let mut hits = catalog::parse_search_response(&body)?;
        hits.truncate(MAX_RESULTS_PER_QUERY);

        debug!("Search '{}' returned {} hits", text, hits.len());
        Ok(hits)
    }

    /// Fetch one record with the full plot.
    pub async fn try_fetch(&self, id: &str) -> Result<MovieRecord, OmdbError> {
        let body = self.get(&[("i", id), ("plot", "full")]).await?;
        let record = catalog::parse_detail_response(&body)?;

        debug!("Fetched details for {} ({})", record.title, record.id);
        Ok(record)
    }

    /// Issue a GET with `params` plus the API key and return the raw body.
    async fn get(&self, params: &[(&str, &str)]) -> Result<String, OmdbError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("apikey", &self.api_key);

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OmdbError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl MovieGateway for OmdbClient {
    async fn search_by_title(&self, text: &str) -> Vec<SearchHit> {
        match self.try_search(text).await {
            Ok(hits) => hits,
            // OMDb reports "no matches" as an API error; that one is routine
            Err(OmdbError::Catalog(CatalogError::Api { message })) => {
                debug!("Search '{}' found nothing: {}", text, message);
                Vec::new()
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", text, e);
                Vec::new()
            }
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Option<MovieRecord> {
        match self.try_fetch(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Detail lookup for {} failed: {}", id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OmdbConfig::new("key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = OmdbConfig::new("key").with_base_url("not a url");

        assert!(matches!(
            OmdbClient::new(config),
            Err(OmdbError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_client_keeps_base_url() {
        let config = OmdbConfig::new("key")
            .with_base_url("http://localhost:8080/")
            .with_timeout(Duration::from_secs(2));
        let client = OmdbClient::new(config).unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }
}
