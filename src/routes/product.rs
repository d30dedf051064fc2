//! Product routes. `:id` is checked for digits by the `ProductId` extractor.

use crate::extractors::ProductId;
use crate::handlers::{create_product, delete_product, get_product, list_products, update_product};
use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Router};

/// Unrouted methods on `/products/:id`: a non-numeric id is still a plain 404.
async fn id_method_not_allowed(_: ProductId) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(id_method_not_allowed),
        )
        .with_state(state)
}
