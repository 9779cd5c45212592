//! Climate store queries
//!
//! Read-only access to the `measurement` and `station` tables. Every query
//! runs against a shared pool and is bounded by the configured timeout.

use crate::climate::error::StoreError;
use crate::climate::models::{PrecipitationReading, TemperatureNormals, TemperatureReading};
use crate::climate::schema;
use crate::climate::window::ObservationWindow;
use crate::config::StoreConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Read-only connection pool over the climate store
pub struct ClimateDb {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl ClimateDb {
    /// Open the store and verify its layout
    ///
    /// # Arguments
    /// * `config` - Store location, pool size and query timeout
    ///
    /// # Returns
    /// * `Ok(ClimateDb)` if the store was opened and matches the declared schema
    /// * `Err(StoreError::Unavailable)` if the file cannot be opened
    /// * `Err(StoreError::SchemaMismatch)` if a declared table or column is missing
    pub async fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let db_path = config.database_path.as_str();

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| StoreError::Unavailable(format!("Invalid database path: {}", e)))?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("Failed to open {}: {}", db_path, e))
            })?;

        info!("Connected to climate store at: {}", db_path);

        schema::verify(&pool).await?;

        Ok(Self {
            pool,
            query_timeout: Duration::from_secs(config.query_timeout_secs),
        })
    }

    /// Await a query, failing with `StoreError::Timeout` once the deadline passes
    async fn bounded<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout.as_secs()))?
            .map_err(StoreError::from)
    }

    /// Check the pool can still reach the store
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(&self.pool)).await?;
        Ok(())
    }

    /// Every `(date, prcp)` pair in the measurement table
    ///
    /// No ordering is applied; rows come back in the store's scan order.
    pub async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, StoreError> {
        let readings = self
            .bounded(
                sqlx::query_as::<_, PrecipitationReading>(
                    "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement",
                )
                .fetch_all(&self.pool),
            )
            .await?;

        debug!(rows = readings.len(), "Fetched precipitation readings");
        Ok(readings)
    }

    /// Identifier of every station, in the store's scan order
    pub async fn station_ids(&self) -> Result<Vec<String>, StoreError> {
        let ids = self
            .bounded(
                sqlx::query_scalar::<_, String>("SELECT station FROM station")
                    .fetch_all(&self.pool),
            )
            .await?;

        debug!(rows = ids.len(), "Fetched station identifiers");
        Ok(ids)
    }

    /// Greatest date string in the measurement table
    ///
    /// Recomputed on every call since the store may change underneath us.
    ///
    /// # Returns
    /// * `Err(StoreError::NoData)` if the table is empty
    pub async fn latest_date(&self) -> Result<String, StoreError> {
        let latest = self
            .bounded(
                sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
                    .fetch_one(&self.pool),
            )
            .await?;

        latest.ok_or(StoreError::NoData)
    }

    /// `(date, tobs)` pairs whose date lies within the window, bounds included
    pub async fn temperatures_within(
        &self,
        window: &ObservationWindow,
    ) -> Result<Vec<TemperatureReading>, StoreError> {
        let readings = self
            .bounded(
                sqlx::query_as::<_, TemperatureReading>(
                    "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement WHERE date BETWEEN ? AND ?",
                )
                .bind(&window.start)
                .bind(&window.end)
                .fetch_all(&self.pool),
            )
            .await?;

        debug!(
            start = %window.start,
            end = %window.end,
            rows = readings.len(),
            "Fetched temperature readings"
        );
        Ok(readings)
    }

    /// Temperature readings for the 365 days ending at the latest date
    pub async fn last_year_temperatures(&self) -> Result<Vec<TemperatureReading>, StoreError> {
        let latest = self.latest_date().await?;
        let window = ObservationWindow::one_year_ending(&latest)?;
        self.temperatures_within(&window).await
    }

    /// Min/avg/max temperature where `start <= date <= end`
    ///
    /// Bounds are compared as strings and are not checked for date format.
    /// A range that matches nothing yields all-`None` normals.
    pub async fn normals_between(
        &self,
        start: &str,
        end: &str,
    ) -> Result<TemperatureNormals, StoreError> {
        let normals = self
            .bounded(
                sqlx::query_as::<_, TemperatureNormals>(
                    "SELECT CAST(MIN(tobs) AS REAL) AS min, AVG(tobs) AS avg, CAST(MAX(tobs) AS REAL) AS max \
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool),
            )
            .await?;

        debug!(start, end, empty = normals.is_empty(), "Computed temperature normals");
        Ok(normals)
    }

    /// Min/avg/max temperature from `start` through the latest date
    pub async fn normals_since(&self, start: &str) -> Result<TemperatureNormals, StoreError> {
        let latest = self.latest_date().await?;
        self.normals_between(start, &latest).await
    }
}
