//! Product handlers.

use axum::{
    extract::State,
    routing::{post, put},
    Router,
};

use crate::api::extractors::{JsonBody, OptionalJsonBody};
use crate::api::AppState;
use crate::domain::{Product, ProductCreateRequest, ProductRequest, ProductUpdateRequest};
use crate::types::Outcome;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(get_products))
        .route("/add", put(add_product))
        .route("/update", put(update_product))
}

/// List products matching an optional filter
#[utoipa::path(
    post,
    path = "/data/products",
    tag = "Products",
    request_body(content = ProductRequest, description = "Filter; omit or send null for all products"),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Products could not be retrieved", body = [String])
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
    OptionalJsonBody(request): OptionalJsonBody<ProductRequest>,
) -> Outcome<Vec<Product>> {
    state.data_service.get_products(request).await
}

/// Add a product to an existing category
#[utoipa::path(
    put,
    path = "/data/products/add",
    tag = "Products",
    request_body = ProductCreateRequest,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 400, description = "Validation error", body = [String]),
        (status = 404, description = "Category does not exist", body = [String]),
        (status = 500, description = "Product could not be added", body = [String])
    )
)]
pub async fn add_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ProductCreateRequest>,
) -> Outcome<Product> {
    state.data_service.add_product(request).await
}

/// Patch an existing product; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/data/products/update",
    tag = "Products",
    request_body = ProductUpdateRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation error", body = [String]),
        (status = 404, description = "Product or category does not exist", body = [String]),
        (status = 500, description = "Product could not be updated", body = [String])
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ProductUpdateRequest>,
) -> Outcome<Product> {
    state.data_service.update_product(request).await
}
