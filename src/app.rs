//! Route table served by the `path-router` binary.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::config::RouterConfig;
use crate::routing::{RouteError, RouteRequest, Router};

/// Registers the bundled routes.
pub fn demo_router(config: &RouterConfig) -> Result<Router, RouteError> {
    Router::from_config(config)
        .add_route("GET", "/", index)?
        .add_route("GET", "/health/ready", ready)?
        .add_route("GET", "/search", search)?
        .add_route("GET", "/book/{isbn}", book)
}

async fn index(_req: RouteRequest) -> &'static str {
    "path-router\n"
}

async fn ready(_req: RouteRequest) -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}

async fn search(req: RouteRequest) -> impl IntoResponse {
    match req.param("s") {
        Some(query) if !query.trim().is_empty() => {
            tracing::debug!(query = %query, "Search");
            (StatusCode::OK, Json(json!({ "query": query, "results": [] })))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "missing search term `s`" })),
        ),
    }
}

async fn book(req: RouteRequest) -> impl IntoResponse {
    Json(json!({ "isbn": req.param("isbn"), "params": req.params() }))
}
