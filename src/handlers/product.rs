//! Product CRUD and list handlers.

use crate::error::AppError;
use crate::extractors::{ProductBody, ProductId};
use crate::model::{Product, ProductInput};
use crate::response::{product_page, ProductPage};
use crate::service::{PageRequest, ProductValidator};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created, empty body"),
        (status = 400, description = "Malformed JSON or invalid product data", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ProductBody(input): ProductBody,
) -> Result<impl IntoResponse, AppError> {
    ProductValidator::validate(&input)?;
    state.products.insert(&input).await?;
    tracing::info!(name = %input.name, "product created");
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id, digits only")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
    Ok(Json(product))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id, digits only")),
    request_body = ProductInput,
    responses(
        (status = 204, description = "Updated; also returned when the id does not exist"),
        (status = 400, description = "Malformed JSON or invalid product data", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ProductBody(input): ProductBody,
) -> Result<impl IntoResponse, AppError> {
    ProductValidator::validate(&input)?;
    state.products.update(id, &input).await?;
    tracing::info!(id, "product updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id, digits only")),
    responses(
        (status = 204, description = "Deleted; also returned when the id does not exist"),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> Result<impl IntoResponse, AppError> {
    state.products.delete(id).await?;
    tracing::info!(id, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, > 0"),
        ("offset" = Option<i64>, Query, description = "Rows to skip, >= 0")
    ),
    responses(
        (status = 200, description = "One page of products", body = ProductPage),
        (status = 400, description = "Invalid limit or offset value", body = String),
        (status = 500, description = "Storage error", body = String)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageRequest::resolve(
        params.get("limit").map(String::as_str),
        params.get("offset").map(String::as_str),
        state.pagination,
    )?;
    let total = state.products.count().await?;
    let products = state.products.page(page.limit, page.offset).await?;
    Ok(product_page(total, page, products))
}
