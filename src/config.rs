//! Configuration for Medalboard.
//!
//! The shard lists are plain data handed to the clients at construction.
//! Defaults point at the public mock services; the binary may override the
//! base URLs from the environment.

use std::env;

/// Base URL for the event shards.
pub const EVENTS_BASE_URL: &str = "https://my-json-server.typicode.com/Jasmxnej";

/// Per-shard paths under [`EVENTS_BASE_URL`], in merge order.
pub const EVENT_SHARD_PATHS: &[&str] = &[
    "countrymedal/data1",
    "data2/data2",
    "data3/data3",
    "data4/data4",
    "data5/data5",
    "data6/data6",
    "data7/data7",
    "data8/data8",
    "data9/data9",
    "data10/data10",
];

/// Base URL for the country shards.
pub const COUNTRIES_BASE_URL: &str = "https://my-json-server.typicode.com/matchimaky";

/// Per-shard paths under [`COUNTRIES_BASE_URL`], in merge order.
pub const COUNTRY_SHARD_PATHS: &[&str] = &[
    "dbolympic/country",
    "dbolympic2/country",
    "dbolympic3/country",
    "dbolympic4/country",
    "dbolympic5/country",
];

/// Default port if not specified via environment variable.
pub const DEFAULT_PORT: u16 = 3000;

/// A base locator plus the ordered list of shard paths beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardSource {
    pub base_url: String,
    pub shard_paths: Vec<String>,
}

impl ShardSource {
    pub fn new<I, S>(base_url: &str, shard_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.to_string(),
            shard_paths: shard_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The mock event shards.
    pub fn events() -> Self {
        Self::new(EVENTS_BASE_URL, EVENT_SHARD_PATHS.iter().copied())
    }

    /// The mock country shards.
    pub fn countries() -> Self {
        Self::new(COUNTRIES_BASE_URL, COUNTRY_SHARD_PATHS.iter().copied())
    }

    /// Keep the shard paths, point them at a different base (for testing).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Full shard URLs in shard-list order.
    pub fn shard_urls(&self) -> Vec<String> {
        let base = self.base_url.trim_end_matches('/');
        self.shard_paths
            .iter()
            .map(|path| format!("{}/{}", base, path.trim_start_matches('/')))
            .collect()
    }
}

/// Shard sources for both entity types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub events: ShardSource,
    pub countries: ShardSource,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            events: ShardSource::events(),
            countries: ShardSource::countries(),
        }
    }
}

/// Settings for the `medalboard` server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog: CatalogConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `MEDALBOARD_PORT`: listen port (default 3000)
    /// - `MEDALBOARD_EVENTS_BASE_URL`: override the event shard base
    /// - `MEDALBOARD_COUNTRIES_BASE_URL`: override the country shard base
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("MEDALBOARD_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mut catalog = CatalogConfig::default();
        if let Some(url) = lookup("MEDALBOARD_EVENTS_BASE_URL") {
            catalog.events = catalog.events.with_base_url(&url);
        }
        if let Some(url) = lookup("MEDALBOARD_COUNTRIES_BASE_URL") {
            catalog.countries = catalog.countries.with_base_url(&url);
        }

        Self { port, catalog }
    }
}
