//! Integration test: the hero listing and search routes end to end.
//!
//! Drives the real router with the built-in catalog of 25 heroes in
//! 5 pages of 5.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use boruto_core::Dataset;
use boruto_gateway::{config::GatewayConfig, routes::create_router};
use serde_json::Value;
use tower::ServiceExt;

fn catalog() -> Arc<Dataset> {
    match Dataset::builtin() {
        Ok(d) => Arc::new(d),
        Err(e) => panic!("builtin catalog must partition: {e}"),
    }
}

fn app(dataset: Arc<Dataset>) -> Router {
    create_router(dataset, &GatewayConfig::from_lookup(|_| None))
}

async fn fetch(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_else(|e| panic!("failed to build request for {uri}: {e}"));
    let resp = app
        .oneshot(req)
        .await
        .unwrap_or_else(|e| panic!("request to {uri} failed: {e}"));
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 256 * 1024)
        .await
        .unwrap_or_else(|e| panic!("failed to read body of {uri}: {e}"));
    (status, bytes.to_vec())
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| panic!("invalid JSON: {e}"))
}

#[tokio::test]
async fn every_page_matches_its_partition() {
    let dataset = catalog();
    for page in 1..=5usize {
        let (status, body) = fetch(app(Arc::clone(&dataset)), &format!("/boruto/heroes?page={page}")).await;
        assert_eq!(status, StatusCode::OK, "page {page}");
        let body = parse(&body);

        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "ok");
        assert!(body["lastUpdated"].is_i64(), "lastUpdated must be epoch millis");

        let prev = body.get("prevPage").and_then(Value::as_u64);
        let next = body.get("nextPage").and_then(Value::as_u64);
        let p = page as u64;
        assert_eq!(prev, (page > 1).then(|| p - 1), "prevPage on page {page}");
        assert_eq!(next, (page < 5).then(|| p + 1), "nextPage on page {page}");

        let expected: Vec<(u64, &str)> = dataset.heroes()[(page - 1) * 5..page * 5]
            .iter()
            .map(|h| (u64::from(h.id.get()), h.name.as_str()))
            .collect();
        let actual: Vec<(u64, &str)> = body["heroes"]
            .as_array()
            .unwrap_or_else(|| panic!("heroes must be an array on page {page}"))
            .iter()
            .map(|h| {
                (
                    h["id"].as_u64().unwrap_or_default(),
                    h["name"].as_str().unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(actual, expected, "heroes on page {page}");
    }
}

#[tokio::test]
async fn page_three_points_to_two_and_four() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes?page=3").await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["prevPage"], 2);
    assert_eq!(body["nextPage"], 4);
    assert_eq!(body["heroes"][0]["id"], 11);
    assert_eq!(body["heroes"][4]["id"], 15);
}

#[tokio::test]
async fn non_existing_page_is_404() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes?page=8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body = parse(&body);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Page Not Found.");
    assert!(body.get("heroes").is_none(), "error envelope carries no heroes");
}

#[tokio::test]
async fn invalid_page_is_400() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes?page=invalid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        parse(&body),
        serde_json::json!({"success": false, "message": "Only numbers are allowed!"})
    );
}

#[tokio::test]
async fn search_partial_name_returns_single_hero() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes/search?name=sas").await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["heroes"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["heroes"][0]["name"], "Sasuke");
    assert!(body.get("prevPage").is_none());
    assert!(body.get("nextPage").is_none());
}

#[tokio::test]
async fn search_empty_text_returns_empty_list() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes/search?name=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["heroes"], serde_json::json!([]));
}

#[tokio::test]
async fn search_unknown_hero_returns_empty_list() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes/search?name=unknown").await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["heroes"], serde_json::json!([]));
}

#[tokio::test]
async fn search_with_repeated_name_still_succeeds() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes/search?name=sas&name=x").await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["heroes"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn listing_with_repeated_page_serves_first_value() {
    let (status, body) = fetch(app(catalog()), "/boruto/heroes?page=1&page=2").await;
    assert_eq!(status, StatusCode::OK);
    let body = parse(&body);
    assert_eq!(body["heroes"][0]["id"], 1);
    assert_eq!(body["nextPage"], 2);
}

#[tokio::test]
async fn unknown_route_is_page_not_found() {
    let (status, body) = fetch(app(catalog()), "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Page Not Found.");
}

#[tokio::test]
async fn concurrent_requests_share_one_catalog() {
    let dataset = catalog();
    let mut tasks = Vec::new();
    for page in 1..=5usize {
        let router = app(Arc::clone(&dataset));
        tasks.push(tokio::spawn(async move {
            fetch(router, &format!("/boruto/heroes?page={page}")).await.0
        }));
    }
    for task in tasks {
        let status = task.await.unwrap_or_else(|e| panic!("task panicked: {e}"));
        assert_eq!(status, StatusCode::OK);
    }
}
