//! Product API: CRUD and paginated listing of products over PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig, PaginationDefaults, ServerConfig};
pub use error::{AppError, ConfigError, InitError};
pub use model::{Product, ProductInput};
pub use response::ProductPage;
pub use routes::{app, common_routes, product_routes};
pub use service::{PageRequest, PgProductRepository, ProductRepository};
pub use state::AppState;
pub use store::{connect, ensure_products_table};
