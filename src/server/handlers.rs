use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::region::{MatchRule, Region, RegionStats};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

#[derive(Deserialize)]
pub struct RegionQuery {
    pub query: Option<String>,
}

impl RegionQuery {
    /// The raw query; only blank input is rejected, the text itself is passed through untouched.
    fn require(&self) -> Result<&str, ApiError> {
        match self.query.as_deref() {
            Some(q) if !q.trim().is_empty() => Ok(q),
            _ => Err(api_error(StatusCode::BAD_REQUEST, "Missing 'query' parameter")),
        }
    }
}

// ─── GET /api/regions/resolve ────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    #[serde(rename = "match")]
    pub match_rule: MatchRule,
}

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let start = Instant::now();
    let query = params.require()?;

    let (region, rule) = state.resolver.resolve_detailed(query).ok_or_else(|| {
        api_error(StatusCode::NOT_FOUND, format!("Region not found: '{}'", query))
    })?;

    tracing::info!(
        query,
        code = %region.code,
        %rule,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/regions/resolve"
    );

    let county_name = state.resolver.catalog().county_of(region).map(|c| c.name.clone());
    Ok(Json(ResolveResponse {
        region: region.clone(),
        county_name,
        match_rule: rule,
    }))
}

// ─── GET /api/regions/search ─────────────────────────────────────

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    #[serde(rename = "match")]
    pub match_rule: MatchRule,
    pub count: usize,
    pub regions: Vec<Region>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();
    let query = params.require()?;

    let result = state.resolver.search_detailed(query);

    tracing::info!(
        query,
        rule = %result.rule,
        count = result.regions.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/regions/search"
    );

    Ok(Json(SearchResponse {
        query: query.to_string(),
        match_rule: result.rule,
        count: result.regions.len(),
        regions: result.regions.into_iter().cloned().collect(),
    }))
}

// ─── GET /api/regions/{code} ─────────────────────────────────────

pub async fn region_by_code(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Region>, ApiError> {
    state
        .resolver
        .catalog()
        .get_by_code(&code)
        .cloned()
        .map(Json)
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, format!("Unknown region code '{}'", code)))
}

// ─── GET /api/counties ───────────────────────────────────────────

pub async fn counties(State(state): State<Arc<AppState>>) -> Json<Vec<Region>> {
    Json(state.resolver.catalog().counties().into_iter().cloned().collect())
}

pub async fn county_municipalities(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Json<Vec<Region>> {
    Json(
        state
            .resolver
            .catalog()
            .municipalities_in_county(&code)
            .into_iter()
            .cloned()
            .collect(),
    )
}

// ─── GET /api/stats ──────────────────────────────────────────────

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<RegionStats> {
    Json(state.resolver.catalog().stats())
}
