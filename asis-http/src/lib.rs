use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;

use asis_dashboard::build_section;
use asis_schema::section::Section;
use asis_schema::{ColumnTable, DailyTrafficBatch, KeywordBatch, TrafficBatch};
use asis_synth::SampleCache;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<SampleCache>,
}

#[derive(Debug, Serialize)]
pub struct CacheStatus {
    pub epoch: u64,
    pub filled: bool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/tables/:name", get(table))
        .route("/v1/sections/:name", get(section))
        .route("/v1/cache", get(cache_status))
        .route("/v1/cache/invalidate", post(invalidate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn internal(e: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn table(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<Value> {
    let data = state.cache.get().map_err(internal)?;
    let json = match name.as_str() {
        "keywords" => KeywordBatch::from_table(&data.keywords).and_then(|t| t.to_json()),
        "traffic" => TrafficBatch::from_table(&data.traffic).and_then(|t| t.to_json()),
        "daily" => DailyTrafficBatch::from_rows(&data.daily()).and_then(|t| t.to_json()),
        _ => return Err((StatusCode::NOT_FOUND, format!("unknown table '{name}'"))),
    };
    Ok(Json(json.map_err(internal)?))
}

async fn section(State(state): State<AppState>, Path(name): Path<String>) -> ApiResult<Value> {
    let section = Section::from_slug(&name)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown section '{name}'")))?;
    let data = state.cache.get().map_err(internal)?;
    let view = build_section(section, &data).map_err(internal)?;
    Ok(Json(view.to_json().map_err(internal)?))
}

async fn cache_status(State(state): State<AppState>) -> ApiResult<CacheStatus> {
    Ok(Json(CacheStatus {
        epoch: state.cache.epoch().map_err(internal)?,
        filled: state.cache.is_filled().map_err(internal)?,
    }))
}

async fn invalidate(State(state): State<AppState>) -> ApiResult<CacheStatus> {
    let epoch = state.cache.invalidate().map_err(internal)?;
    Ok(Json(CacheStatus {
        epoch,
        filled: false,
    }))
}
