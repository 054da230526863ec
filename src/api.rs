//! HTTP API handlers for Medalboard.
//!
//! Read-only routes over the [`Catalog`]. Every request re-fetches the
//! relevant shards; nothing is cached between requests.
//!
//! - `GET /events`, `GET /events/:id`
//! - `GET /countries`, `GET /countries/:id`
//! - `GET /health`
//!
//! Lookups that miss answer `404`. Any shard failure answers `502`, since the
//! upstream mock services are the ones at fault.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::model::{EntityKind, Record};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/countries", get(list_countries))
        .route("/countries/:id", get(get_country))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Body returned with every error status.
///
/// ```json
/// { "error": "Event with ID 9 not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
            CatalogError::Fetch { .. } => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// GET /events - All events, merged across every event shard.
#[instrument(skip(state))]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, CatalogError> {
    listed(EntityKind::Event, state.catalog.all_events().await)
}

/// GET /events/:id - The first event with a matching id.
#[instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, CatalogError> {
    looked_up(EntityKind::Event, &id, state.catalog.event(&id).await)
}

/// GET /countries - All countries, merged across every country shard.
#[instrument(skip(state))]
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record>>, CatalogError> {
    listed(EntityKind::Country, state.catalog.all_countries().await)
}

/// GET /countries/:id - The first country with a matching id.
#[instrument(skip(state))]
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>, CatalogError> {
    looked_up(EntityKind::Country, &id, state.catalog.country(&id).await)
}

/// GET /health - Simple health check endpoint.
///
/// Does not touch the shards.
pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

fn listed(
    kind: EntityKind,
    result: Result<Vec<Record>, CatalogError>,
) -> Result<Json<Vec<Record>>, CatalogError> {
    match result {
        Ok(records) => {
            info!(kind = %kind, record_count = records.len(), "Records listed");
            Ok(Json(records))
        }
        Err(e) => {
            warn!(kind = %kind, error = %e, "Failed to list records");
            Err(e)
        }
    }
}

fn looked_up(
    kind: EntityKind,
    id: &str,
    result: Result<Record, CatalogError>,
) -> Result<Json<Record>, CatalogError> {
    match result {
        Ok(record) => {
            info!(kind = %kind, id = %id, "Record found");
            Ok(Json(record))
        }
        Err(e) if e.is_not_found() => {
            info!(kind = %kind, id = %id, "Record not found");
            Err(e)
        }
        Err(e) => {
            warn!(kind = %kind, id = %id, error = %e, "Failed to look up record");
            Err(e)
        }
    }
}
