//! Runtime configuration structs.

use sqlx::postgres::PgSslMode;
use std::net::SocketAddr;

pub const FALLBACK_PAGINATION_LIMIT: i64 = 10;
pub const FALLBACK_PAGINATION_OFFSET: i64 = 0;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub pagination: PaginationDefaults,
    pub server: ServerConfig,
}

/// Connection parameters. `url`, when set, takes precedence over the individual parts.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: None,
            host: "localhost".into(),
            port: 5432,
            user: None,
            password: None,
            name: None,
            ssl_mode: PgSslMode::Disable,
            max_connections: 5,
        }
    }
}

/// Limit and offset used by the list endpoint when the request omits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationDefaults {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        PaginationDefaults {
            limit: FALLBACK_PAGINATION_LIMIT,
            offset: FALLBACK_PAGINATION_OFFSET,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_body_bytes: 1024 * 1024,
        }
    }
}
