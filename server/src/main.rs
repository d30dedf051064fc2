//! Product API server: loads `.env`, connects to PostgreSQL, ensures the products table, serves the API.
//!
//! Run from repo root: `cargo run -p product-server`

use product_api::{app, connect, ensure_products_table, AppConfig, AppState, PgProductRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("product_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;

    let pool = connect(&config.database)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "database unavailable"))?;
    ensure_products_table(&pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "schema bootstrap failed"))?;

    let state = AppState::new(Arc::new(PgProductRepository::new(pool)), config.pagination);
    let router = app(state, config.server.max_body_bytes);

    let listener = TcpListener::bind(config.server.addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
