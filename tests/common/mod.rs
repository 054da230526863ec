//! A local stand-in for the mock JSON shard services.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Barrier;

/// How a single shard path answers.
#[derive(Clone)]
pub enum Shard {
    /// 200 with the given JSON body.
    Json(Value),
    /// 200 with the given JSON body after a delay.
    Delayed(Duration, Value),
    /// 200 with the given JSON body once every shard sharing the barrier has been requested.
    Gated(Arc<Barrier>, Value),
    /// The given status with an empty body.
    Status(StatusCode),
    /// 200 with a body that is not JSON.
    Garbage,
    /// 200 with a single record describing the request headers. Also sets a
    /// cookie, so a client with a cookie store would send it back next time.
    EchoHeaders,
}

impl Shard {
    async fn respond(self, headers: HeaderMap) -> Response {
        match self {
            Shard::Json(body) => Json(body).into_response(),
            Shard::Delayed(delay, body) => {
                tokio::time::sleep(delay).await;
                Json(body).into_response()
            }
            Shard::Gated(barrier, body) => {
                barrier.wait().await;
                Json(body).into_response()
            }
            Shard::Status(status) => status.into_response(),
            Shard::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
            Shard::EchoHeaders => {
                let accept = headers
                    .get(header::ACCEPT)
                    .and_then(|v| v.to_str().ok());
                let body = json!([{
                    "id": "headers",
                    "accept": accept,
                    "cookie": headers.contains_key(header::COOKIE),
                    "authorization": headers.contains_key(header::AUTHORIZATION),
                }]);
                (
                    [(header::SET_COOKIE, "session=shard; Path=/")],
                    Json(body),
                )
                    .into_response()
            }
        }
    }
}

/// Serve the given shards on an ephemeral loopback port and return the base URL.
pub async fn spawn_shards(shards: Vec<(&str, Shard)>) -> String {
    let mut app = Router::new();
    for (path, shard) in shards {
        app = app.route(
            &format!("/{}", path.trim_start_matches('/')),
            get(move |headers: HeaderMap| shard.clone().respond(headers)),
        );
    }

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
