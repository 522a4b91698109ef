//! Domain layer - Core business entities and request types
//!
//! Categories and products, the request DTOs that create, filter and patch
//! them, and the validation applied before any store access.

pub mod category;
pub mod product;
pub mod validation;

pub use category::{Category, CategoryCreateRequest, CategoryRequest};
pub use product::{Product, ProductCreateRequest, ProductRequest, ProductUpdateRequest};
pub use validation::validate_request;
