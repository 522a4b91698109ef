//! Data service - Catalog use cases.
//!
//! Each operation validates the request, consults the store and folds the
//! result into an [`Outcome`]. Store errors never cross this boundary.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{
    MSG_ADD_CATEGORY_FAILED, MSG_ADD_PRODUCT_FAILED, MSG_GET_CATEGORIES_FAILED,
    MSG_GET_PRODUCTS_FAILED, MSG_UPDATE_PRODUCT_FAILED,
};
use crate::domain::{
    validate_request, Category, CategoryCreateRequest, CategoryRequest, Product,
    ProductCreateRequest, ProductRequest, ProductUpdateRequest,
};
use crate::errors::AppResult;
use crate::infra::CatalogRepository;
use crate::types::Outcome;

/// Data service trait for dependency injection.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Create a category
    async fn add_category(&self, request: CategoryCreateRequest) -> Outcome<Category>;

    /// Create a product in an existing category
    async fn add_product(&self, request: ProductCreateRequest) -> Outcome<Product>;

    /// List categories; `None` lists all of them
    async fn get_categories(&self, request: Option<CategoryRequest>) -> Outcome<Vec<Category>>;

    /// List products; `None` lists all of them
    async fn get_products(&self, request: Option<ProductRequest>) -> Outcome<Vec<Product>>;

    /// Patch an existing product
    async fn update_product(&self, request: ProductUpdateRequest) -> Outcome<Product>;
}

/// Concrete implementation of DataService over a catalog repository.
pub struct DataManager {
    repo: Arc<dyn CatalogRepository>,
}

impl DataManager {
    /// Create new data service instance
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    async fn category_exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.repo.find_category_by_id(id).await?.is_some())
    }
}

fn category_missing<T>(id: Uuid) -> Outcome<T> {
    tracing::warn!(category_id = %id, "Referenced category does not exist");
    Outcome::not_found(format!("Category with Id {} does not exist.", id))
}

fn product_missing<T>(id: Uuid) -> Outcome<T> {
    tracing::warn!(product_id = %id, "Product does not exist");
    Outcome::not_found(format!("Product with Id {} does not exist.", id))
}

fn rejected<T>(messages: Vec<String>) -> Outcome<T> {
    tracing::warn!(?messages, "Request rejected by validation");
    Outcome::bad_request(messages)
}

#[async_trait]
impl DataService for DataManager {
    async fn add_category(&self, request: CategoryCreateRequest) -> Outcome<Category> {
        if let Err(messages) = validate_request(&request) {
            return rejected(messages);
        }

        let category = Category::from(request);
        match self.repo.insert_category(&category).await {
            Ok(created) => {
                tracing::debug!(category_id = %created.id, "Category added");
                Outcome::ok(created)
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to add category");
                Outcome::internal_error(MSG_ADD_CATEGORY_FAILED)
            }
        }
    }

    async fn add_product(&self, request: ProductCreateRequest) -> Outcome<Product> {
        if let Err(messages) = validate_request(&request) {
            return rejected(messages);
        }

        match self.category_exists(request.category_id).await {
            Ok(true) => {}
            Ok(false) => return category_missing(request.category_id),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to look up category");
                return Outcome::internal_error(MSG_ADD_PRODUCT_FAILED);
            }
        }

        let product = Product::from(request);
        match self.repo.insert_product(&product).await {
            Ok(created) => {
                tracing::debug!(product_id = %created.id, "Product added");
                Outcome::ok(created)
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to add product");
                Outcome::internal_error(MSG_ADD_PRODUCT_FAILED)
            }
        }
    }

    async fn get_categories(&self, request: Option<CategoryRequest>) -> Outcome<Vec<Category>> {
        let filter = request.unwrap_or_default();
        match self.repo.query_categories(&filter).await {
            Ok(categories) => Outcome::ok(categories),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to query categories");
                Outcome::internal_error(MSG_GET_CATEGORIES_FAILED)
            }
        }
    }

    async fn get_products(&self, request: Option<ProductRequest>) -> Outcome<Vec<Product>> {
        let filter = request.unwrap_or_default();
        match self.repo.query_products(&filter).await {
            Ok(products) => Outcome::ok(products),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to query products");
                Outcome::internal_error(MSG_GET_PRODUCTS_FAILED)
            }
        }
    }

    async fn update_product(&self, request: ProductUpdateRequest) -> Outcome<Product> {
        if let Err(messages) = validate_request(&request) {
            return rejected(messages);
        }

        let mut product = match self.repo.find_product_by_id(request.id).await {
            Ok(Some(product)) => product,
            Ok(None) => return product_missing(request.id),
            Err(e) => {
                tracing::error!(error = ?e, "Failed to look up product");
                return Outcome::internal_error(MSG_UPDATE_PRODUCT_FAILED);
            }
        };

        if let Some(category_id) = request.category_id {
            match self.category_exists(category_id).await {
                Ok(true) => {}
                Ok(false) => return category_missing(category_id),
                Err(e) => {
                    tracing::error!(error = ?e, "Failed to look up category");
                    return Outcome::internal_error(MSG_UPDATE_PRODUCT_FAILED);
                }
            }
        }

        product.apply_update(request);
        match self.repo.update_product(&product).await {
            Ok(updated) => {
                tracing::debug!(product_id = %updated.id, "Product updated");
                Outcome::ok(updated)
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to update product");
                Outcome::internal_error(MSG_UPDATE_PRODUCT_FAILED)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockCatalogRepository;
    use crate::types::StatusClass;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn manager(repo: MockCatalogRepository) -> DataManager {
        DataManager::new(Arc::new(repo))
    }

    fn beverages() -> Category {
        Category::new("Beverages".to_string(), "Drinks".to_string())
    }

    fn product_request(category_id: Uuid) -> ProductCreateRequest {
        ProductCreateRequest {
            name: "Cold brew".to_string(),
            price: Decimal::new(450, 2),
            category_id,
        }
    }

    #[tokio::test]
    async fn add_category_returns_created_category() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert_category()
            .times(1)
            .returning(|c| Ok(c.clone()));

        let outcome = manager(repo)
            .add_category(CategoryCreateRequest {
                name: "Beverages".to_string(),
                description: "Drinks".to_string(),
            })
            .await;

        assert!(outcome.is_successful());
        let category = outcome.into_data().expect("category");
        assert_eq!(category.name, "Beverages");
        assert_eq!(category.description, "Drinks");
    }

    #[tokio::test]
    async fn add_category_hides_store_failure() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert_category()
            .returning(|_| Err(AppError::persistence("disk I/O error")));

        let outcome = manager(repo)
            .add_category(CategoryCreateRequest::default())
            .await;

        assert_eq!(outcome.status(), StatusClass::InternalError);
        assert_eq!(outcome.messages(), ["Unable to add category."]);
        assert!(outcome.data().is_none());
    }

    #[tokio::test]
    async fn add_category_rejects_overlong_name_without_writing() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_insert_category().never();

        let outcome = manager(repo)
            .add_category(CategoryCreateRequest {
                name: "x".repeat(256),
                description: String::new(),
            })
            .await;

        assert_eq!(outcome.status(), StatusClass::BadRequest);
        assert_eq!(outcome.messages(), ["Name must be at most 255 characters"]);
    }

    #[tokio::test]
    async fn add_product_with_unknown_category_is_not_found() {
        let category_id = Uuid::new_v4();
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_category_by_id()
            .with(eq(category_id))
            .returning(|_| Ok(None));
        repo.expect_insert_product().never();

        let outcome = manager(repo).add_product(product_request(category_id)).await;

        assert_eq!(outcome.status(), StatusClass::NotFound);
        assert_eq!(
            outcome.messages(),
            [format!("Category with Id {} does not exist.", category_id)]
        );
    }

    #[tokio::test]
    async fn add_product_in_existing_category() {
        let category = beverages();
        let category_id = category.id;
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_category_by_id()
            .with(eq(category_id))
            .returning(move |_| Ok(Some(category.clone())));
        repo.expect_insert_product()
            .times(1)
            .returning(|p| Ok(p.clone()));

        let outcome = manager(repo).add_product(product_request(category_id)).await;

        assert!(outcome.is_successful());
        let product = outcome.into_data().expect("product");
        assert_eq!(product.category_id, category_id);
        assert_eq!(product.price, Decimal::new(450, 2));
    }

    #[tokio::test]
    async fn add_product_store_failure_uses_fixed_message() {
        let category = beverages();
        let category_id = category.id;
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_category_by_id()
            .returning(move |_| Ok(Some(category.clone())));
        repo.expect_insert_product()
            .returning(|_| Err(AppError::persistence("UNIQUE constraint failed")));

        let outcome = manager(repo).add_product(product_request(category_id)).await;

        assert_eq!(outcome.status(), StatusClass::InternalError);
        assert_eq!(outcome.messages(), ["Unable to add product."]);
    }

    #[tokio::test]
    async fn get_products_without_request_uses_empty_filter() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_query_products()
            .withf(|f| f.ids.is_none() && f.names.is_none() && f.min_price.is_none())
            .returning(|_| Ok(Vec::new()));

        let outcome = manager(repo).get_products(None).await;

        assert!(outcome.is_successful());
        assert_eq!(outcome.data(), Some(&Vec::new()));
    }

    #[tokio::test]
    async fn get_categories_failure_is_internal_error() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_query_categories()
            .returning(|_| Err(AppError::persistence("connection reset")));

        let outcome = manager(repo)
            .get_categories(Some(CategoryRequest::default()))
            .await;

        assert_eq!(outcome.status(), StatusClass::InternalError);
        assert_eq!(outcome.messages(), ["Unable to retrieve categories."]);
    }

    #[tokio::test]
    async fn update_unknown_product_checks_nothing_else() {
        let id = Uuid::new_v4();
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product_by_id()
            .with(eq(id))
            .returning(|_| Ok(None));
        repo.expect_find_category_by_id().never();
        repo.expect_update_product().never();

        let outcome = manager(repo)
            .update_product(ProductUpdateRequest {
                category_id: Some(Uuid::new_v4()),
                ..ProductUpdateRequest::for_product(id)
            })
            .await;

        assert_eq!(outcome.status(), StatusClass::NotFound);
        assert_eq!(
            outcome.messages(),
            [format!("Product with Id {} does not exist.", id)]
        );
    }

    #[tokio::test]
    async fn update_to_unknown_category_leaves_product_untouched() {
        let existing = Product::new("Tea".to_string(), Decimal::new(2, 0), Uuid::new_v4());
        let id = existing.id;
        let missing_category = Uuid::new_v4();
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_category_by_id()
            .with(eq(missing_category))
            .returning(|_| Ok(None));
        repo.expect_update_product().never();

        let outcome = manager(repo)
            .update_product(ProductUpdateRequest {
                category_id: Some(missing_category),
                ..ProductUpdateRequest::for_product(id)
            })
            .await;

        assert_eq!(outcome.status(), StatusClass::NotFound);
        assert_eq!(
            outcome.messages(),
            [format!("Category with Id {} does not exist.", missing_category)]
        );
    }

    #[tokio::test]
    async fn update_name_only_keeps_other_fields() {
        let category_id = Uuid::new_v4();
        let existing = Product::new("Tea".to_string(), Decimal::new(2, 0), category_id);
        let id = existing.id;
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_find_category_by_id().never();
        repo.expect_update_product()
            .withf(|p| p.name == "Green tea")
            .returning(|p| Ok(p.clone()));

        let outcome = manager(repo)
            .update_product(ProductUpdateRequest {
                name: Some("Green tea".to_string()),
                ..ProductUpdateRequest::for_product(id)
            })
            .await;

        let product = outcome.into_data().expect("updated product");
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Green tea");
        assert_eq!(product.price, Decimal::new(2, 0));
        assert_eq!(product.category_id, category_id);
    }

    #[tokio::test]
    async fn invalid_update_is_rejected_before_lookup() {
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product_by_id().never();

        let outcome = manager(repo)
            .update_product(ProductUpdateRequest {
                name: Some("x".repeat(300)),
                ..ProductUpdateRequest::for_product(Uuid::new_v4())
            })
            .await;

        assert_eq!(outcome.status(), StatusClass::BadRequest);
        assert!(!outcome.messages().is_empty());
    }

    #[tokio::test]
    async fn update_store_failure_uses_fixed_message() {
        let existing = Product::new("Tea".to_string(), Decimal::new(2, 0), Uuid::new_v4());
        let id = existing.id;
        let mut repo = MockCatalogRepository::new();
        repo.expect_find_product_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update_product()
            .returning(|_| Err(AppError::persistence("database is locked")));

        let outcome = manager(repo)
            .update_product(ProductUpdateRequest {
                price: Some(Decimal::new(3, 0)),
                ..ProductUpdateRequest::for_product(id)
            })
            .await;

        assert_eq!(outcome.status(), StatusClass::InternalError);
        assert_eq!(outcome.messages(), ["Unable to update product."]);
    }
}
