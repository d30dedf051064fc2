//! Product storage, validation and pagination.

mod pagination;
mod repository;
mod validation;
pub use pagination::PageRequest;
pub use repository::{PgProductRepository, ProductRepository};
pub use validation::ProductValidator;
