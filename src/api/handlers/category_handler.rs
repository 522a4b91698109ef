//! Category handlers.

use axum::{
    extract::State,
    routing::{post, put},
    Router,
};

use crate::api::extractors::{JsonBody, OptionalJsonBody};
use crate::api::AppState;
use crate::domain::{Category, CategoryCreateRequest, CategoryRequest};
use crate::types::Outcome;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(get_categories))
        .route("/add", put(add_category))
}

/// List categories matching an optional filter
#[utoipa::path(
    post,
    path = "/data/categories",
    tag = "Categories",
    request_body(content = CategoryRequest, description = "Filter; omit or send null for all categories"),
    responses(
        (status = 200, description = "Matching categories", body = [Category]),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Categories could not be retrieved", body = [String])
    )
)]
pub async fn get_categories(
    State(state): State<AppState>,
    OptionalJsonBody(request): OptionalJsonBody<CategoryRequest>,
) -> Outcome<Vec<Category>> {
    state.data_service.get_categories(request).await
}

/// Add a category
#[utoipa::path(
    put,
    path = "/data/categories/add",
    tag = "Categories",
    request_body = CategoryCreateRequest,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, description = "Validation error", body = [String]),
        (status = 500, description = "Category could not be added", body = [String])
    )
)]
pub async fn add_category(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CategoryCreateRequest>,
) -> Outcome<Category> {
    state.data_service.add_category(request).await
}
