use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use asis_http::{app, AppState};
use asis_synth::{SampleCache, SampleDataSynthesizer};

fn test_app() -> Router {
    let cache = Arc::new(SampleCache::new(SampleDataSynthesizer::new(), Some(11)));
    app(AppState { cache })
}

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn healthz_ok() {
    let app = test_app();
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn traffic_table_is_column_oriented() {
    let app = test_app();
    let (status, body) = call(&app, Method::GET, "/v1/tables/traffic").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["num_rows"], 100);
    for name in ["date", "organic_traffic", "page_views", "bounce_rate"] {
        assert_eq!(body["columns"][name].as_array().unwrap().len(), 100);
    }
}

#[tokio::test]
async fn repeated_reads_hit_the_cache() {
    let app = test_app();
    let (_, first) = call(&app, Method::GET, "/v1/tables/traffic").await;
    let (_, second) = call(&app, Method::GET, "/v1/tables/traffic").await;
    assert_eq!(first, second);

    let (_, status) = call(&app, Method::GET, "/v1/cache").await;
    assert_eq!(status["epoch"], 0);
    assert_eq!(status["filled"], true);
}

#[tokio::test]
async fn invalidate_advances_epoch_and_resamples() {
    let app = test_app();
    let (_, before) = call(&app, Method::GET, "/v1/tables/traffic").await;

    let (status, body) = call(&app, Method::POST, "/v1/cache/invalidate").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["epoch"], 1);
    assert_eq!(body["filled"], false);

    let (_, after) = call(&app, Method::GET, "/v1/tables/traffic").await;
    assert_eq!(after["num_rows"], 100);
    assert_ne!(before["columns"], after["columns"]);

    let (_, keywords) = call(&app, Method::GET, "/v1/tables/keywords").await;
    assert_eq!(keywords["num_rows"], 5);
}

#[tokio::test]
async fn sections_resolve_by_slug() {
    let app = test_app();
    let (status, body) = call(&app, Method::GET, "/v1/sections/audit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "SEO Audit");
    assert_eq!(body["panels"].as_array().unwrap().len(), 2);

    let (status, _) = call(&app, Method::GET, "/v1/sections/settings").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::GET, "/v1/tables/backlinks").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
