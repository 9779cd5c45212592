//! Station API handlers

use crate::api::RouterState;
use crate::error::AppError;
use axum::{extract::State, response::Json};

/// GET /api/v1.0/stations - Every station identifier
pub async fn stations(State(db): State<RouterState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(db.station_ids().await?))
}
