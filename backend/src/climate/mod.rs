//! Climate module
//!
//! Read-only access to precomputed climate observations stored in SQLite.

pub mod db;
pub mod error;
pub mod models;
pub mod schema;
pub mod window;

pub use db::ClimateDb;
pub use error::StoreError;
pub use models::{
    Observation, PrecipitationReading, Station, TemperatureNormals, TemperatureReading,
};
pub use window::ObservationWindow;
