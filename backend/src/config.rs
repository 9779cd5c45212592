//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Climate store configuration
    pub store: StoreConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Climate store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite file, or a `sqlite:` URI
    pub database_path: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Per-query timeout (in seconds)
    pub query_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            store: StoreConfig {
                database_path: env::var("CLIMATE_DB_PATH")
                    .unwrap_or_else(|_| "hawaii.sqlite".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
                query_timeout_secs: env::var("QUERY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .filter(|t| *t > 0)
                    .unwrap_or(10),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "PORT",
        "HOST",
        "CLIMATE_DB_PATH",
        "DB_MAX_CONNECTIONS",
        "QUERY_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.store.database_path, "hawaii.sqlite");
        assert_eq!(config.store.max_connections, 5);
        assert_eq!(config.store.query_timeout_secs, 10);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("PORT", "5000");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("CLIMATE_DB_PATH", "sqlite:///data/hawaii.sqlite");
        env::set_var("QUERY_TIMEOUT_SECS", "3");
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.server_addr(), "127.0.0.1:5000");
        assert_eq!(config.store.database_path, "sqlite:///data/hawaii.sqlite");
        assert_eq!(config.store.query_timeout_secs, 3);
    }

    #[test]
    #[serial]
    fn test_unparseable_values_fall_back() {
        clear_env();
        env::set_var("PORT", "not-a-port");
        env::set_var("DB_MAX_CONNECTIONS", "0");
        let config = Config::from_env();
        clear_env();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.max_connections, 5);
    }
}
