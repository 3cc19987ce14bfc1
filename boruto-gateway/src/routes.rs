//! Axum route handlers for the Boruto hero API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use boruto_core::{ApiResponse, CoreError, Dataset};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::{config::GatewayConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

/// The catalog shared by every handler. Never mutated after startup.
pub type SharedDataset = Arc<Dataset>;

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Boruto API!";

// ── Query parameters ──────────────────────────────────────────────────────────

/// Raw query pairs in request order. Repeated keys are kept, not rejected.
type QueryPairs = Vec<(String, String)>;

/// The first value given for `key`, if any.
fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given catalog.
pub fn create_router(dataset: SharedDataset, config: &GatewayConfig) -> Router {
    let images = ServeDir::new(&config.images_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(root))
        .route("/boruto/heroes", get(list_heroes))
        .route("/boruto/heroes/search", get(search_heroes))
        .route("/health", get(health))
        .nest_service("/images", images)
        .fallback(not_found)
        .with_state(dataset)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: welcome banner.
pub async fn root() -> &'static str {
    WELCOME_MESSAGE
}

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /boruto/heroes?page=N`: one page of the catalog.
///
/// A missing `page` parameter selects page 1. When `page` is repeated, the
/// first value wins.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] (400) if `page` is not an integer, or
/// [`CoreError::NotFound`] (404) if it is outside the catalog.
pub async fn list_heroes(
    State(dataset): State<SharedDataset>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Response, GatewayError> {
    let token = first_param(&pairs, "page");
    let page = dataset
        .resolve_page(token)
        .inspect_err(|e| debug!(page = ?token, error = %e, "rejected page token"))?;
    debug!(page = %page.current, heroes = page.heroes.len(), "serving page");
    Ok(Json(ApiResponse::from_page(page)).into_response())
}

/// `GET /boruto/heroes/search?name=Q`: case-insensitive name search.
///
/// Never fails; an empty or missing `name` yields an empty result. When
/// `name` is repeated, the first value wins.
pub async fn search_heroes(
    State(dataset): State<SharedDataset>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let name = first_param(&pairs, "name").unwrap_or_default();
    let matches = dataset.search(name);
    debug!(query = %name, matches = matches.len(), "search");
    Json(ApiResponse::from_search(matches)).into_response()
}

/// Fallback for unknown routes and missing images.
pub async fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, CoreError::NotFound.to_string())
}
