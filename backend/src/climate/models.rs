//! Climate data models
//!
//! Row types read from the `measurement` and `station` tables, plus the
//! shapes the API serializes.

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};
use sqlx::FromRow;

/// A single station/date measurement record
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Station identifier (e.g. "USC00519397")
    pub station: String,
    /// Observation date, stored as a `YYYY-MM-DD` string
    pub date: String,
    /// Precipitation, absent for some readings
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

/// A fixed weather-station metadata record
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Station identifier
    pub station: String,
    /// Human-readable station name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Elevation
    pub elevation: f64,
}

/// Precipitation on a given date
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PrecipitationReading {
    /// Observation date
    pub date: String,
    /// Precipitation amount, `null` when not recorded
    pub prcp: Option<f64>,
}

/// Observed temperature on a given date
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TemperatureReading {
    /// Observation date
    pub date: String,
    /// Observed temperature
    pub tobs: f64,
}

/// Min/average/max temperature over a date range
///
/// Serialized as a `[min, avg, max]` tuple. Every field is `None` when no
/// rows matched the range.
#[derive(Debug, Clone, Copy, PartialEq, Default, FromRow)]
pub struct TemperatureNormals {
    /// Lowest observed temperature
    pub min: Option<f64>,
    /// Mean observed temperature
    pub avg: Option<f64>,
    /// Highest observed temperature
    pub max: Option<f64>,
}

impl TemperatureNormals {
    /// True when the range matched no observations
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}

impl Serialize for TemperatureNormals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.min)?;
        tuple.serialize_element(&self.avg)?;
        tuple.serialize_element(&self.max)?;
        tuple.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normals_serialize_as_tuple() {
        let normals = TemperatureNormals {
            min: Some(80.0),
            avg: Some(81.0),
            max: Some(82.0),
        };
        assert_eq!(serde_json::to_value(normals).unwrap(), json!([80.0, 81.0, 82.0]));
    }

    #[test]
    fn test_empty_normals_serialize_as_nulls() {
        let normals = TemperatureNormals::default();
        assert!(normals.is_empty());
        assert_eq!(serde_json::to_value(normals).unwrap(), json!([null, null, null]));
    }

    #[test]
    fn test_precipitation_uses_prcp_key() {
        let reading = PrecipitationReading {
            date: "2017-08-23".to_string(),
            prcp: None,
        };
        assert_eq!(
            serde_json::to_value(reading).unwrap(),
            json!({"date": "2017-08-23", "prcp": null})
        );
    }

    #[test]
    fn test_temperature_uses_tobs_key() {
        let reading = TemperatureReading {
            date: "2017-08-23".to_string(),
            tobs: 81.0,
        };
        assert_eq!(
            serde_json::to_value(reading).unwrap(),
            json!({"date": "2017-08-23", "tobs": 81.0})
        );
    }
}
