//! Shared application state for all routes.

use crate::config::PaginationDefaults;
use crate::service::ProductRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub pagination: PaginationDefaults,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>, pagination: PaginationDefaults) -> Self {
        AppState { products, pagination }
    }
}
