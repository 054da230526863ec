//! Medalboard - fan-out aggregation of sharded Olympic event and country data.
//!
//! # Overview
//!
//! The event and country collections are split across several static mock
//! JSON endpoints ("shards"). Medalboard fetches every shard of a collection
//! concurrently, concatenates the arrays in shard order, and answers
//! lookups by the records' string `id`.
//!
//! Every call goes back to the shards. There is no caching, no retry and no
//! partial success: one failing shard fails the whole call.
//!
//! # Modules
//!
//! - [`model`]: Opaque records and entity kinds
//! - [`error`]: Fetch and not-found errors
//! - [`config`]: Shard sources and server settings
//! - [`client`]: The fan-out/merge/lookup client
//! - [`catalog`]: Event and country clients side by side
//! - [`api`]: HTTP API handlers

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use client::AggregatingFetchClient;
pub use config::{CatalogConfig, ServerConfig, ShardSource};
pub use error::{CatalogError, FetchFailure};
pub use model::{EntityKind, Record};
