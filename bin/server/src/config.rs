//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables. Nested keys
//! use `__` as the separator, so `POOL__MAX_CONNECTIONS=10` sets
//! [`PoolConfig::max_connections`].

use serde::Deserialize;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL.
    pub database_url: String,

    /// Connection pool configuration.
    #[serde(default)]
    pub pool: PoolConfig,
}

/// Database connection pool settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long to wait for a free connection before failing a request.
    #[serde(default = "default_acquire_timeout_seconds")]
    pub acquire_timeout_seconds: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_seconds() -> u64 {
    10
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            acquire_timeout_seconds: default_acquire_timeout_seconds(),
        }
    }
}

impl PoolConfig {
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_config_has_correct_defaults() {
        let config = PoolConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn pool_section_is_optional() {
        let config: ServerConfig = config::Config::builder()
            .set_override("database_url", "postgres://localhost/makaya")
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.database_url, "postgres://localhost/makaya");
        assert_eq!(config.pool.max_connections, 5);
    }

    #[test]
    fn nested_pool_keys_override_defaults() {
        let config: ServerConfig = config::Config::builder()
            .set_override("database_url", "postgres://localhost/makaya")
            .expect("override")
            .set_override("pool.max_connections", 12)
            .expect("override")
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");
        assert_eq!(config.pool.max_connections, 12);
        assert_eq!(config.pool.acquire_timeout_seconds, 10);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = config::Config::builder()
            .build()
            .expect("build")
            .try_deserialize::<ServerConfig>();
        assert!(result.is_err());
    }
}
