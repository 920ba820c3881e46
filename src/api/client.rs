//! PokeAPI Client
//!
//! Fetches and decodes PokeAPI resources, consulting the response cache
//! before touching the network.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for PokeAPI backed by a shared TTL cache.
///
/// Cloning is cheap; clones share both the connection pool and the cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client with its own HTTP connection pool.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://pokeapi.co/api/v2`
    /// * `cache` - Response cache shared with any other clients
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: impl Into<String>, cache: Cache, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url, cache))
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config, cache: Cache) -> Result<Self> {
        Self::new(config.base_url.clone(), cache, config.request_timeout())
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of the location area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// Fetches one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_cached(&url).await
    }

    pub async fn get_location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_cached(&self.location_area_url(name)).await
    }

    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_cached(&self.pokemon_url(name)).await
    }

    // == Fetch Cached ==
    /// Returns the decoded resource at `url`, from the cache when possible.
    ///
    /// On a miss the body is fetched and decoded, and only a body that decodes
    /// is stored under `url`. Transport errors, non-success statuses and
    /// malformed payloads all leave the cache untouched.
    pub async fn fetch_cached<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit: {}", url);
            return Ok(serde_json::from_slice(&body)?);
        }
        debug!("Cache miss: {}", url);

        let body = self.fetch(url).await?;
        let decoded = serde_json::from_slice(&body).map_err(|err| {
            warn!("Malformed response from {}: {}", url, err);
            err
        })?;
        self.cache.add(url, body).await;

        Ok(decoded)
    }

    // == Fetch ==
    /// Performs the GET for `url` without consulting or filling the cache.
    async fn fetch(&self, url: &str) -> Result<Arc<[u8]>> {
        let response = self.http.get(url).send().await.map_err(|err| {
            warn!("Request to {} failed: {}", url, err);
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {} returned {}", url, status);
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.bytes().await?.to_vec().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_urls_strip_trailing_slash() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();
        let client = PokeApiClient::with_client(Client::new(), "https://pokeapi.co/api/v2/", cache);

        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            client.location_areas_url(),
            "https://pokeapi.co/api/v2/location-area"
        );
        assert_eq!(
            client.location_area_url("canalave-city-area"),
            "https://pokeapi.co/api/v2/location-area/canalave-city-area"
        );
        assert_eq!(
            client.pokemon_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_cached_body_served_without_network() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();
        // Nothing listens here; a network call would fail.
        let client = PokeApiClient::new("http://127.0.0.1:9", cache.clone(), Duration::from_secs(1))
            .unwrap();

        let url = client.pokemon_url("ditto");
        cache
            .add(
                url.clone(),
                br#"{"name":"ditto","height":3,"weight":40,"base_experience":101}"#.to_vec(),
            )
            .await;

        let pokemon = client.get_pokemon("ditto").await.unwrap();
        assert_eq!(pokemon.name, "ditto");
        assert_eq!(pokemon.base_experience, 101);

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_malformed_cached_body_is_parse_error() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();
        let client = PokeApiClient::new("http://127.0.0.1:9", cache.clone(), Duration::from_secs(1))
            .unwrap();

        cache.add(client.pokemon_url("glitch"), b"not json".to_vec()).await;

        let result = client.get_pokemon("glitch").await;
        assert!(matches!(result, Err(PokedexError::Parse(_))));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_connection_failure_not_cached() {
        let (cache, reaper) = Cache::new(Duration::from_secs(5)).unwrap();
        let client = PokeApiClient::new("http://127.0.0.1:9", cache.clone(), Duration::from_secs(1))
            .unwrap();

        let result = client.get_pokemon("pikachu").await;
        assert!(matches!(result, Err(PokedexError::Request(_))));
        assert!(cache.is_empty().await);

        reaper.shutdown().await;
    }
}
