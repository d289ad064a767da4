//! Configuration loaded from environment variables.
//!
//! Loading is fail-fast: a missing required variable or an unparseable
//! port aborts startup with a clear message instead of limping along.

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Runtime configuration for the server.
///
/// The database URL and all token settings (secret, issuer, audience)
/// are required; only the bind address and log filter have defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string.
    pub database_url: String,
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
    /// Value of the `iss` claim on issued tokens.
    pub jwt_issuer: String,
    /// Value of the `aud` claim on issued tokens.
    pub jwt_audience: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            jwt_issuer: require("JWT_ISSUER")?,
            jwt_audience: require("JWT_AUDIENCE")?,
            host: env_or("HOST", "0.0.0.0"),
            port: parse_port(&env_or("PORT", "3000"))?,
            log_filter: env_or("LOG_FILTER", "info,taller_server=debug"),
        })
    }

    /// The address to bind, as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVar(var.to_string()))
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: "PORT".to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_missing_var_fails() {
        env::remove_var("TALLER_TEST_UNSET_VAR");
        let result = require("TALLER_TEST_UNSET_VAR");
        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }

    #[test]
    fn test_require_blank_var_fails() {
        env::set_var("TALLER_TEST_BLANK_VAR", "   ");
        let result = require("TALLER_TEST_BLANK_VAR");
        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
        env::remove_var("TALLER_TEST_BLANK_VAR");
    }

    #[test]
    fn test_require_present_var_succeeds() {
        env::set_var("TALLER_TEST_SET_VAR", "taller-api");
        assert_eq!(require("TALLER_TEST_SET_VAR").unwrap(), "taller-api");
        env::remove_var("TALLER_TEST_SET_VAR");
    }

    #[test]
    fn test_parse_port_accepts_valid() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port("65535").unwrap(), 65535);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("70000").is_err());
        assert!(parse_port("").is_err());
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let config = Config {
            database_url: "postgres://localhost/taller".to_string(),
            jwt_secret: "secret".to_string(),
            jwt_issuer: "taller-api".to_string(),
            jwt_audience: "taller-clients".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_filter: "info".to_string(),
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
