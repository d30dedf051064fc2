//! OpenAPI document for the HTTP surface, served at `/openapi.json`.

use crate::handlers::product;
use crate::model::{Product, ProductInput};
use crate::response::ProductPage;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "product-api", description = "Product CRUD and pagination"),
    paths(
        product::create_product,
        product::get_product,
        product::update_product,
        product::delete_product,
        product::list_products,
    ),
    components(schemas(Product, ProductInput, ProductPage)),
    tags((name = "products", description = "Product catalogue"))
)]
pub struct ApiDoc;
