//! API module
//!
//! HTTP handlers for the climate endpoints and the router that ties them
//! together.

pub mod index;
pub mod measurements;
pub mod normals;
pub mod stations;

use crate::climate::ClimateDb;
use axum::{extract::Request, middleware::Next, response::Response, routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// State shared by every handler: the pooled store handle
pub type RouterState = Arc<ClimateDb>;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Build the application router over a store handle
pub fn router(db: RouterState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/api/health", get(index::health_check))
        // Literal routes win over the `:start` capture below
        .route(
            "/api/v1.0/precipitation",
            get(measurements::precipitation),
        )
        .route("/api/v1.0/stations", get(stations::stations))
        .route("/api/v1.0/tobs", get(measurements::tobs))
        .route("/api/v1.0/:start", get(normals::normals_from_start))
        .route("/api/v1.0/:start/:end", get(normals::normals_range))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(db)
}
