//! Index and health handlers

use crate::api::RouterState;
use crate::climate::StoreError;
use crate::error::AppError;
use axum::{
    extract::State,
    response::{Html, Json},
};
use serde::Serialize;

/// Route listing served at `/`
pub const INDEX_BODY: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/[start]<br/>",
    "/api/v1.0/[start]/[end]<br/>",
    "NOTE: Enter [start] and [end] values as date strings in the %Y-%m-%d format",
);

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status ("healthy")
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable message
    pub message: String,
}

/// GET / - List available routes
pub async fn index() -> Html<&'static str> {
    Html(INDEX_BODY)
}

/// GET /api/health - Check the store is reachable
pub async fn health_check(
    State(db): State<RouterState>,
) -> Result<Json<HealthResponse>, AppError> {
    db.ping()
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Climate store is reachable".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_lists_every_route() {
        let Html(body) = index().await;
        for route in [
            "/api/v1.0/precipitation",
            "/api/v1.0/stations",
            "/api/v1.0/tobs",
            "/api/v1.0/[start]",
            "/api/v1.0/[start]/[end]",
        ] {
            assert!(body.contains(route), "missing {}", route);
        }
        assert!(body.ends_with("%Y-%m-%d format"));
    }
}
