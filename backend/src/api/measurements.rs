//! Observation API handlers
//!
//! Precipitation and last-year temperature listings.

use crate::api::RouterState;
use crate::climate::{PrecipitationReading, StoreError, TemperatureReading};
use crate::error::AppError;
use axum::{extract::State, response::Json};
use tracing::warn;

/// GET /api/v1.0/precipitation - Every `{date, prcp}` pair
pub async fn precipitation(
    State(db): State<RouterState>,
) -> Result<Json<Vec<PrecipitationReading>>, AppError> {
    Ok(Json(db.precipitation().await?))
}

/// GET /api/v1.0/tobs - `{date, tobs}` pairs for the 365 days up to the latest date
///
/// An empty measurement table answers with an empty list.
pub async fn tobs(
    State(db): State<RouterState>,
) -> Result<Json<Vec<TemperatureReading>>, AppError> {
    match db.last_year_temperatures().await {
        Ok(readings) => Ok(Json(readings)),
        Err(StoreError::NoData) => {
            warn!("No observations stored; returning empty temperature list");
            Ok(Json(Vec::new()))
        }
        Err(e) => Err(e.into()),
    }
}
