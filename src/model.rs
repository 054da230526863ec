//! Data models for Medalboard.
//!
//! Records coming back from the shard endpoints are kept opaque. The only
//! field this crate ever reads is the string `id` used for lookups; every
//! other field is passed through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of entity a shard source serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// An Olympic event with its medal results.
    Event,
    /// A participating country.
    Country,
}

impl EntityKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Event => "Event",
            EntityKind::Country => "Country",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single record returned by a shard.
///
/// Serializes exactly as the shard sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// The record's `id`, if present and a JSON string.
    ///
    /// Numeric ids are not coerced: `{"id": 2}` has no id as far
    /// as lookups are concerned.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Read any other field of the record.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// The record as the shard sent it.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
