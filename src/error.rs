//! Error types for Medalboard.
//!
//! Library code returns `Result<T, CatalogError>`. Only `main.rs` uses
//! `anyhow::Result`.

use thiserror::Error;

use crate::model::EntityKind;

/// Why a single shard could not be turned into records.
#[derive(Error, Debug)]
pub enum FetchFailure {
    /// Transport error, non-2xx status, or a body that is not valid JSON.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The body parsed as JSON but was not an array of records.
    #[error("expected a JSON array, got {found}")]
    NotAnArray { found: &'static str },
}

/// Errors surfaced by the aggregating clients.
///
/// Callers branch on the variant rather than on the message.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A shard request failed, which fails the whole aggregate call.
    #[error("failed to fetch {kind} shard {url}")]
    Fetch {
        kind: EntityKind,
        url: String,
        #[source]
        source: FetchFailure,
    },

    /// The aggregate fetch succeeded but no record carries the requested id.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: String },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message_names_id() {
        let err = CatalogError::NotFound {
            kind: EntityKind::Event,
            id: "9".to_string(),
        };

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Event with ID 9 not found");
    }

    #[test]
    fn test_country_not_found_uses_country_label() {
        let err = CatalogError::NotFound {
            kind: EntityKind::Country,
            id: "THA".to_string(),
        };

        assert!(matches!(
            err,
            CatalogError::NotFound {
                kind: EntityKind::Country,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Country with ID THA not found");
    }

    #[test]
    fn test_fetch_error_keeps_source_chain() {
        let err = CatalogError::Fetch {
            kind: EntityKind::Country,
            url: "https://example.test/dbolympic/country".to_string(),
            source: FetchFailure::NotAnArray { found: "object" },
        };

        assert!(!err.is_not_found());
        assert!(err.to_string().contains("dbolympic/country"));
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("expected a JSON array, got object".to_string())
        );
    }
}
