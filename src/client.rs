//! Fan-out client over a list of JSON shards.
//!
//! Every call fetches all shards of its [`ShardSource`] concurrently and joins
//! them all-or-nothing. The merged sequence follows shard-list order, never
//! completion order. Nothing is cached between calls.
//!
//! # Usage
//!
//! ```ignore
//! let events = AggregatingFetchClient::new(EntityKind::Event, ShardSource::events());
//! let all = events.list_all().await?;
//! let one = events.get_by_id("12").await?;
//! ```

use std::sync::Arc;

use futures::future::try_join_all;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::config::ShardSource;
use crate::error::{CatalogError, FetchFailure};
use crate::model::{EntityKind, Record};

/// Client that merges the records of every shard in a [`ShardSource`].
///
/// Requests carry `Accept: application/json` and no credentials; the
/// underlying `reqwest::Client` has no cookie store.
#[derive(Clone)]
pub struct AggregatingFetchClient {
    client: reqwest::Client,
    kind: EntityKind,
    source: Arc<ShardSource>,
}

impl AggregatingFetchClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(kind: EntityKind, source: ShardSource) -> Self {
        Self::with_client(reqwest::Client::new(), kind, source)
    }

    /// Create a client that shares an existing HTTP connection pool.
    pub fn with_client(client: reqwest::Client, kind: EntityKind, source: ShardSource) -> Self {
        Self {
            client,
            kind,
            source: Arc::new(source),
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn source(&self) -> &ShardSource {
        &self.source
    }

    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url).header(ACCEPT, "application/json")
    }

    /// Fetch every shard concurrently and concatenate the results.
    ///
    /// Fails as a whole if any single shard fails; there is no partial result.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn list_all(&self) -> Result<Vec<Record>, CatalogError> {
        let urls = self.source.shard_urls();

        let shards = try_join_all(urls.iter().map(|url| self.fetch_shard(url))).await?;
        let records: Vec<Record> = shards.into_iter().flatten().collect();

        info!(
            shard_count = urls.len(),
            record_count = records.len(),
            "Shards merged"
        );
        Ok(records)
    }

    /// Return the first record, in merge order, whose `id` equals `id`.
    ///
    /// Ids are not unique across shards; an earlier shard shadows later ones.
    #[instrument(skip(self), fields(kind = %self.kind))]
    pub async fn get_by_id(&self, id: &str) -> Result<Record, CatalogError> {
        self.list_all()
            .await?
            .into_iter()
            .find(|record| record.id() == Some(id))
            .ok_or_else(|| CatalogError::NotFound {
                kind: self.kind,
                id: id.to_string(),
            })
    }

    async fn fetch_shard(&self, url: &str) -> Result<Vec<Record>, CatalogError> {
        let fail = |source: FetchFailure| CatalogError::Fetch {
            kind: self.kind,
            url: url.to_string(),
            source,
        };

        let response = self
            .build_request(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| fail(e.into()))?;
        let body = response.json::<Value>().await.map_err(|e| fail(e.into()))?;

        let records: Vec<Record> = match body {
            Value::Array(items) => items.into_iter().map(Record::from).collect(),
            other => {
                return Err(fail(FetchFailure::NotAnArray {
                    found: json_type_name(&other),
                }));
            }
        };

        debug!(url = %url, record_count = records.len(), "Shard fetched");
        Ok(records)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!({"id": "1"})), "object");
        assert_eq!(json_type_name(&json!("x")), "string");
        assert_eq!(json_type_name(&Value::Null), "null");
    }

    #[test]
    fn test_client_exposes_source() {
        let client = AggregatingFetchClient::new(EntityKind::Country, ShardSource::countries());

        assert_eq!(client.kind(), EntityKind::Country);
        assert_eq!(client.source().shard_paths.len(), 5);
    }

    #[tokio::test]
    async fn test_empty_source_lists_nothing() {
        let client = AggregatingFetchClient::new(
            EntityKind::Event,
            ShardSource::new("http://127.0.0.1:1", Vec::<String>::new()),
        );

        assert!(client.list_all().await.unwrap().is_empty());

        let err = client.get_by_id("1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_shard_is_fetch_error() {
        // Port 1 on loopback refuses connections.
        let client = AggregatingFetchClient::new(
            EntityKind::Event,
            ShardSource::new("http://127.0.0.1:1", ["data1"]),
        );

        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, CatalogError::Fetch { kind: EntityKind::Event, .. }));
    }
}
