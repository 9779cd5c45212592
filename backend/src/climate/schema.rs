//! Declared layout of the climate store
//!
//! The service never creates or alters tables. At startup it checks that the
//! store matches the layout declared here and refuses to serve otherwise.

use crate::climate::error::StoreError;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// A table the service reads from, with the columns it depends on
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    /// Table name
    pub name: &'static str,
    /// Columns the queries reference
    pub columns: &'static [&'static str],
}

/// Observation table: one row per station per date
pub const MEASUREMENT: TableSchema = TableSchema {
    name: "measurement",
    columns: &["station", "date", "prcp", "tobs"],
};

/// Station metadata table
pub const STATION: TableSchema = TableSchema {
    name: "station",
    columns: &["station", "name", "latitude", "longitude", "elevation"],
};

/// All tables the service reads
pub const TABLES: &[TableSchema] = &[MEASUREMENT, STATION];

/// DDL matching the declared layout, for provisioning fixture stores
pub const CREATE_TABLES: &str = "
CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    date TEXT NOT NULL,
    prcp FLOAT,
    tobs FLOAT NOT NULL
);
CREATE TABLE IF NOT EXISTS station (
    id INTEGER PRIMARY KEY,
    station TEXT NOT NULL,
    name TEXT NOT NULL,
    latitude FLOAT NOT NULL,
    longitude FLOAT NOT NULL,
    elevation FLOAT NOT NULL
);
";

/// Check every declared table and column exists in the store
///
/// # Returns
/// * `Ok(())` if the store matches the declared layout
/// * `Err(StoreError::SchemaMismatch)` naming the first missing table or column
pub async fn verify(pool: &SqlitePool) -> Result<(), StoreError> {
    for table in TABLES {
        let present = sqlx::query_scalar::<_, String>("SELECT name FROM pragma_table_info(?)")
            .bind(table.name)
            .fetch_all(pool)
            .await?;

        if present.is_empty() {
            return Err(StoreError::SchemaMismatch(format!(
                "table '{}' not found",
                table.name
            )));
        }

        for column in table.columns {
            if !present.iter().any(|p| p.eq_ignore_ascii_case(column)) {
                return Err(StoreError::SchemaMismatch(format!(
                    "column '{}.{}' not found",
                    table.name, column
                )));
            }
        }

        debug!(table = table.name, columns = present.len(), "Table verified");
    }

    info!("Climate store schema verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database")
    }

    #[tokio::test]
    async fn test_verify_accepts_declared_layout() {
        let pool = memory_pool().await;
        sqlx::raw_sql(CREATE_TABLES).execute(&pool).await.unwrap();
        assert!(verify(&pool).await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_rejects_missing_table() {
        let pool = memory_pool().await;
        sqlx::query("CREATE TABLE measurement (station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)")
            .execute(&pool)
            .await
            .unwrap();

        let err = verify(&pool).await.unwrap_err();
        assert!(matches!(err, StoreError::SchemaMismatch(_)));
        assert!(err.to_string().contains("station"));
    }

    #[tokio::test]
    async fn test_verify_rejects_missing_column() {
        let pool = memory_pool().await;
        sqlx::raw_sql(
            "CREATE TABLE measurement (station TEXT, date TEXT, prcp FLOAT);
             CREATE TABLE station (station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT);",
        )
        .execute(&pool)
        .await
        .unwrap();

        let err = verify(&pool).await.unwrap_err();
        assert!(err.to_string().contains("measurement.tobs"));
    }
}
