//! Medalboard - fan-out aggregation of sharded Olympic event and country data.
//!
//! # API Endpoints
//!
//! - `GET /events` - All events across every event shard
//! - `GET /events/:id` - A single event
//! - `GET /countries` - All countries across every country shard
//! - `GET /countries/:id` - A single country
//! - `GET /health` - Health check
//!
//! # Environment
//!
//! - `MEDALBOARD_PORT` (default 3000)
//! - `MEDALBOARD_EVENTS_BASE_URL`, `MEDALBOARD_COUNTRIES_BASE_URL`
//! - `RUST_LOG`

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use medalboard::api::{AppState, router};
use medalboard::{Catalog, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with environment filter
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("medalboard=info".parse()?))
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env();

    info!(
        port = config.port,
        events_base_url = %config.catalog.events.base_url,
        event_shards = config.catalog.events.shard_paths.len(),
        countries_base_url = %config.catalog.countries.base_url,
        country_shards = config.catalog.countries.shard_paths.len(),
        "Starting Medalboard server"
    );

    // Both clients share one HTTP connection pool
    let state = AppState {
        catalog: Catalog::new(config.catalog),
    };

    // Build router
    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Medalboard is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
