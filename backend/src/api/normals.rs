//! Temperature normals API handlers
//!
//! Both routes answer with a one-element list holding a `[min, avg, max]`
//! tuple. Bounds are read from the raw request path and percent-decoded
//! lossily, so no segment is ever rejected. They are used as-is in a string
//! comparison against the stored dates; they are not parsed as dates.

use crate::api::RouterState;
use crate::climate::{StoreError, TemperatureNormals};
use crate::error::AppError;
use axum::{extract::State, http::Uri, response::Json};
use percent_encoding::percent_decode_str;
use tracing::warn;

/// Path prefix shared by both normals routes
const NORMALS_PREFIX: &str = "/api/v1.0/";

/// Segments after the route prefix, decoded with invalid UTF-8 replaced by U+FFFD
///
/// The router's own capture decoding rejects invalid UTF-8, so the raw path
/// is split here instead.
pub fn date_bounds(uri: &Uri) -> Vec<String> {
    uri.path()
        .strip_prefix(NORMALS_PREFIX)
        .unwrap_or_default()
        .split('/')
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// GET /api/v1.0/:start - Normals from `start` through the latest stored date
pub async fn normals_from_start(
    State(db): State<RouterState>,
    uri: Uri,
) -> Result<Json<Vec<TemperatureNormals>>, AppError> {
    let mut bounds = date_bounds(&uri).into_iter();
    let start = bounds.next().unwrap_or_default();

    let normals = match db.normals_since(&start).await {
        Ok(normals) => normals,
        Err(StoreError::NoData) => {
            warn!(start = %start, "No observations stored; returning empty normals");
            TemperatureNormals::default()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(vec![normals]))
}

/// GET /api/v1.0/:start/:end - Normals where `start <= date <= end`
pub async fn normals_range(
    State(db): State<RouterState>,
    uri: Uri,
) -> Result<Json<Vec<TemperatureNormals>>, AppError> {
    let mut bounds = date_bounds(&uri).into_iter();
    let start = bounds.next().unwrap_or_default();
    let end = bounds.next().unwrap_or_default();

    let normals = db.normals_between(&start, &end).await?;
    Ok(Json(vec![normals]))
}
