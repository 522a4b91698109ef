//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{category_handler, product_handler};
use crate::domain::{
    Category, CategoryCreateRequest, CategoryRequest, Product, ProductCreateRequest,
    ProductRequest, ProductUpdateRequest,
};

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "CRUD API for products and categories with simple filtering",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Product endpoints
        product_handler::get_products,
        product_handler::add_product,
        product_handler::update_product,
        // Category endpoints
        category_handler::get_categories,
        category_handler::add_category,
    ),
    components(
        schemas(
            Category,
            CategoryCreateRequest,
            CategoryRequest,
            Product,
            ProductCreateRequest,
            ProductRequest,
            ProductUpdateRequest,
        )
    ),
    tags(
        (name = "Products", description = "Product queries and mutations"),
        (name = "Categories", description = "Category queries and mutations")
    )
)]
pub struct ApiDoc;
