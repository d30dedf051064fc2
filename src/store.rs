//! Connection initializer: open the pool, probe it, and ensure the products table exists.

use crate::config::DatabaseConfig;
use crate::error::InitError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;

const PRODUCTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        description TEXT,
        price DECIMAL(10, 2) NOT NULL,
        stock INTEGER NOT NULL
    )
"#;

/// Connect options from config. A full `DATABASE_URL` wins over the individual parts.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, InitError> {
    if let Some(url) = &config.url {
        return PgConnectOptions::from_str(url).map_err(InitError::Options);
    }
    let mut opts = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .ssl_mode(config.ssl_mode);
    if let Some(user) = &config.user {
        opts = opts.username(user);
    }
    if let Some(password) = &config.password {
        opts = opts.password(password);
    }
    if let Some(name) = &config.name {
        opts = opts.database(name);
    }
    Ok(opts)
}

/// Open the pool and verify it with a round trip. No retry.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, InitError> {
    let opts = connect_options(config)?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await
        .map_err(InitError::Connect)?;
    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .map_err(InitError::Ping)?;
    tracing::info!("successfully connected to the database");
    Ok(pool)
}

/// Create the products table if it does not exist. Safe to call on every start.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), InitError> {
    sqlx::query(PRODUCTS_DDL)
        .execute(pool)
        .await
        .map_err(InitError::Schema)?;
    tracing::info!("products table ready");
    Ok(())
}
