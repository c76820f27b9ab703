//! Fixture HTTP server for exercising the request executor.
//!
//! # Design
//! Each route reproduces one response shape the executor has to handle: a
//! JSON payload, an empty body, a body that is not JSON, and two echo routes
//! that report back what the server actually received (query string, header
//! value) so tests can verify what went out on the wire. Unmatched paths fall
//! through to axum's default 404.

use axum::{extract::RawQuery, http::HeaderMap, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Sample payload served by `/user`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/user", get(get_user))
        .route("/empty", get(get_empty))
        .route("/raw", get(get_raw))
        .route("/query", get(echo_query))
        .route("/header", get(echo_header))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user() -> Json<User> {
    Json(User {
        id: 1,
        name: "a".to_string(),
    })
}

// 200 with a zero-length body.
async fn get_empty() {}

async fn get_raw() -> &'static str {
    "not-json"
}

/// Returns the raw query string exactly as received, empty if none.
async fn echo_query(RawQuery(query): RawQuery) -> String {
    query.unwrap_or_default()
}

/// Returns the value of the `x-probe` request header, empty if absent.
async fn echo_header(headers: HeaderMap) -> String {
    headers
        .get("x-probe")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
