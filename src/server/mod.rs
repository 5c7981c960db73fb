//! HTTP dispatch layer over the region resolver.

mod handlers;
mod state;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::routing::get;
use axum::Router;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::region::RegionResolver;

pub fn build_router(resolver: RegionResolver) -> Router {
    let state = Arc::new(AppState { resolver });

    Router::new()
        .route("/api/regions/resolve", get(handlers::resolve))
        .route("/api/regions/search", get(handlers::search))
        .route("/api/regions/{code}", get(handlers::region_by_code))
        .route("/api/counties", get(handlers::counties))
        .route("/api/counties/{code}/municipalities", get(handlers::county_municipalities))
        .route("/api/stats", get(handlers::stats))
        // The catalog never changes while the process runs.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, resolver: RegionResolver) -> std::io::Result<()> {
    let app = build_router(resolver);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!("Cannot bind to {}: {}", addr, e);
        e
    })?;

    tracing::info!("SCB Regions server listening on http://{}", addr);
    axum::serve(listener, app).await
}
