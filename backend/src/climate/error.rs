//! Store-specific error types
//!
//! Errors that can occur while opening or querying the climate store.

use thiserror::Error;

/// Errors that can occur while talking to the climate store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened (missing file, bad URI, permissions)
    #[error("Climate store unavailable: {0}")]
    Unavailable(String),

    /// A declared table or column is missing from the store
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// An aggregate was requested over an empty measurement table
    #[error("No observations in the measurement table")]
    NoData,

    /// A stored date string does not follow `%Y-%m-%d`
    #[error("Stored date is not a valid YYYY-MM-DD date: {0}")]
    InvalidStoredDate(String),

    /// A query exceeded the configured per-query timeout
    #[error("Query timed out after {0} seconds")]
    Timeout(u64),

    /// The query itself failed
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),
}
