//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and reap interval in milliseconds
    pub cache_interval_ms: u64,
    /// PokeAPI base URL, without trailing slash
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL_MS` - Cache TTL / reap interval (default: 5000)
    /// - `POKEAPI_BASE_URL` - API base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_REQUEST_TIMEOUT_SECS` - HTTP timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: env::var("POKEDEX_CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval_ms),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            request_timeout_secs: env::var("POKEDEX_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Cache interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5000,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_interval_ms, 5000);
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.cache_interval(), Duration::from_secs(5));
    }

    // Single test touches the environment so parallel tests never race on it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("POKEDEX_REQUEST_TIMEOUT_SECS");

        let config = Config::from_env();
        assert_eq!(config.cache_interval_ms, 5000);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 10);

        env::set_var("POKEDEX_CACHE_INTERVAL_MS", "250");
        env::set_var("POKEAPI_BASE_URL", "http://localhost:8080/api/v2/");
        env::set_var("POKEDEX_REQUEST_TIMEOUT_SECS", "not-a-number");

        let config = Config::from_env();
        assert_eq!(config.cache_interval(), Duration::from_millis(250));
        assert_eq!(config.base_url, "http://localhost:8080/api/v2");
        assert_eq!(config.request_timeout_secs, 10);

        env::remove_var("POKEDEX_CACHE_INTERVAL_MS");
        env::remove_var("POKEAPI_BASE_URL");
        env::remove_var("POKEDEX_REQUEST_TIMEOUT_SECS");
    }
}
