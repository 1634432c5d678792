//! Minimal HTTP surface for deployment checks.
//!
//! Unrelated to the scheduled posting cycle: this artifact exposes a
//! health probe, a ping endpoint that demonstrates the shared-database
//! naming convention, and nothing else.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Prefix applied when `APP_PREFIX` is unset.
pub const DEFAULT_APP_PREFIX: &str = "ashare-snowball";

/// Shared-database table naming convention: `<prefix>__<table>`.
///
/// Pure concatenation; keeping the prefix non-empty is the caller's
/// responsibility.
pub fn table_name(prefix: &str, table: &str) -> String {
    format!("{prefix}__{table}")
}

/// Builds the two-endpoint router. Everything else is a JSON 404.
pub fn router(prefix: String) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/ping", get(ping))
        .fallback(not_found)
        .with_state(prefix)
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn ping(State(prefix): State<String>) -> Json<Value> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("<unformattable>"));
    Json(json!({
        "pong": true,
        "time": time,
        "exampleTable": table_name(&prefix, "profiles"),
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
