//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_EXECUTION_REQUEST_TIMEOUT_SECS,
    DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_POLL_DELAY_MS, DEFAULT_POLL_MAX_ATTEMPTS,
    DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub executor: ExecutorConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
    pub refresh_token_expiry_days: i64,
}

/// Remote execution service configuration
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Base URL of the execution service (e.g. https://executor.example.com)
    pub base_url: String,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Maximum number of poll attempts per test case
    pub poll_max_attempts: u32,
    /// Delay between poll attempts in milliseconds
    pub poll_delay_ms: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            executor: ExecutorConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
            refresh_token_expiry_days: env::var("REFRESH_TOKEN_EXPIRY_DAYS")
                .unwrap_or_else(|_| DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REFRESH_TOKEN_EXPIRY_DAYS".to_string()))?,
        })
    }
}

impl ExecutorConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("EXECUTOR_BASE_URL")
                .map_err(|_| ConfigError::Missing("EXECUTOR_BASE_URL".to_string()))?,
            api_key: env::var("EXECUTOR_API_KEY").ok(),
            poll_max_attempts: env::var("EXECUTOR_POLL_MAX_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_POLL_MAX_ATTEMPTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EXECUTOR_POLL_MAX_ATTEMPTS".to_string()))?,
            poll_delay_ms: env::var("EXECUTOR_POLL_DELAY_MS")
                .unwrap_or_else(|_| DEFAULT_POLL_DELAY_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EXECUTOR_POLL_DELAY_MS".to_string()))?,
            request_timeout_secs: env::var("EXECUTOR_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_EXECUTION_REQUEST_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("EXECUTOR_REQUEST_TIMEOUT_SECS".to_string())
                })?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Test that defaults are applied when env vars are not set
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_executor_defaults() {
        let executor = ExecutorConfig {
            base_url: "http://localhost:2358".to_string(),
            api_key: None,
            poll_max_attempts: DEFAULT_POLL_MAX_ATTEMPTS,
            poll_delay_ms: DEFAULT_POLL_DELAY_MS,
            request_timeout_secs: DEFAULT_EXECUTION_REQUEST_TIMEOUT_SECS,
        };
        assert_eq!(executor.poll_max_attempts, 10);
        assert_eq!(executor.poll_delay_ms, 1000);
    }
}
