//! HTTP client for the PokeAPI catalog.

use std::fmt::Debug;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::types::{DetailRecord, ListResponse};
use crate::config::Settings;
use crate::error::ApiError;

/// Number of entries requested from the list endpoint
pub const CATALOG_PAGE_SIZE: u32 = 400;

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// Configuration for client construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the catalog API, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,
    /// Total timeout per request
    pub timeout: Duration,
}

impl From<&Settings> for ClientConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            base_url: settings.api_base_url.clone(),
            timeout: settings.request_timeout(),
        }
    }
}

/// The catalog operations the load sequence depends on.
///
/// Implemented over HTTP by [`PokeApiClient`]; tests substitute in-memory
/// sources to control timing and failures.
pub trait CatalogSource {
    /// Fetch up to `limit` lightweight references from the list endpoint.
    fn list(&self, limit: u32) -> impl Future<Output = Result<ListResponse, ApiError>> + Send;

    /// Fetch the full record behind a list entry's detail URL.
    fn detail(&self, url: &str) -> impl Future<Output = Result<DetailRecord, ApiError>> + Send;
}

/// A client for the PokeAPI REST service.
#[derive(Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl PokeApiClient {
    /// Create a new client from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Download raw bytes, e.g. a sprite image.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(url, &[]).await?;
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(url, query).await?;
        // A body that stalls or drops mid-read is a transport failure, not a decode one
        let body = response.bytes().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

impl CatalogSource for PokeApiClient {
    #[instrument(skip(self))]
    async fn list(&self, limit: u32) -> Result<ListResponse, ApiError> {
        let url = format!("{}/pokemon", self.config.base_url);
        let list: ListResponse = self.get_json(&url, &[("limit", limit.to_string())]).await?;
        debug!(entries = list.results.len(), "list fetched");
        Ok(list)
    }

    #[instrument(skip(self), level = "debug")]
    async fn detail(&self, url: &str) -> Result<DetailRecord, ApiError> {
        self.get_json(url, &[]).await
    }
}

fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    debug!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "building catalog HTTP client"
    );

    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(15))
        .timeout(config.timeout)
        .build()
        .map_err(ApiError::Build)
}
