//! Load configuration from the process environment.

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let db_defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or(db_defaults.host),
            port: parse_or("DB_PORT", get("DB_PORT"), db_defaults.port)?,
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            name: get("DB_NAME"),
            ssl_mode: parse_or("DB_SSLMODE", get("DB_SSLMODE"), db_defaults.ssl_mode)?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), db_defaults.max_connections)?,
        };

        let pagination = PaginationDefaults {
            limit: int_with_fallback(
                "DEFAULT_PAGINATION_LIMIT",
                get("DEFAULT_PAGINATION_LIMIT"),
                FALLBACK_PAGINATION_LIMIT,
                |n| n > 0,
            ),
            offset: int_with_fallback(
                "DEFAULT_PAGINATION_OFFSET",
                get("DEFAULT_PAGINATION_OFFSET"),
                FALLBACK_PAGINATION_OFFSET,
                |n| n >= 0,
            ),
        };

        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            addr: parse_or("SERVER_ADDR", get("SERVER_ADDR"), server_defaults.addr)?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), server_defaults.max_body_bytes)?,
        };

        Ok(AppConfig {
            database,
            pagination,
            server,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// Integer setting that falls back to `default` when unset, unparsable or rejected by `accept`.
fn int_with_fallback(key: &str, raw: Option<String>, default: i64, accept: impl Fn(i64) -> bool) -> i64 {
    let Some(value) = raw else {
        return default;
    };
    match value.parse::<i64>() {
        Ok(n) if accept(n) => n,
        _ => {
            tracing::warn!(key, value = %value, fallback = default, "ignoring invalid setting");
            default
        }
    }
}
