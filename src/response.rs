//! Response envelopes.

use crate::model::Product;
use crate::service::PageRequest;
use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination envelope returned by the list endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Row count of the whole table.
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub products: Vec<Product>,
}

pub fn product_page(total: i64, page: PageRequest, products: Vec<Product>) -> (StatusCode, Json<ProductPage>) {
    (
        StatusCode::OK,
        Json(ProductPage {
            total,
            limit: page.limit,
            offset: page.offset,
            products,
        }),
    )
}
