//! Event and country catalog.
//!
//! Two independent [`AggregatingFetchClient`]s, one per entity type. They
//! share an HTTP connection pool and nothing else.

use crate::client::AggregatingFetchClient;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{EntityKind, Record};

#[derive(Clone)]
pub struct Catalog {
    events: AggregatingFetchClient,
    countries: AggregatingFetchClient,
}

impl Catalog {
    /// Create a catalog with the given configuration.
    pub fn new(config: CatalogConfig) -> Self {
        let client = reqwest::Client::new();

        Self {
            events: AggregatingFetchClient::with_client(
                client.clone(),
                EntityKind::Event,
                config.events,
            ),
            countries: AggregatingFetchClient::with_client(
                client,
                EntityKind::Country,
                config.countries,
            ),
        }
    }

    /// All events across every event shard.
    pub async fn all_events(&self) -> Result<Vec<Record>, CatalogError> {
        self.events.list_all().await
    }

    /// A single event by id.
    pub async fn event(&self, id: &str) -> Result<Record, CatalogError> {
        self.events.get_by_id(id).await
    }

    /// All countries across every country shard.
    pub async fn all_countries(&self) -> Result<Vec<Record>, CatalogError> {
        self.countries.list_all().await
    }

    /// A single country by id.
    pub async fn country(&self, id: &str) -> Result<Record, CatalogError> {
        self.countries.get_by_id(id).await
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

