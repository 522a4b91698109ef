//! Catalog repository: categories and products behind one store abstraction.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use super::entities::{category, product, CategoryEntity, ProductEntity};
use crate::domain::{Category, CategoryRequest, Product, ProductRequest};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Catalog store trait for dependency injection.
///
/// Ids are assigned by the caller before `insert_*`. Absence on lookup is
/// `Ok(None)`; every storage failure is `AppError::Persistence`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Persist a new category
    async fn insert_category(&self, category: &Category) -> AppResult<Category>;

    /// Find a category by id
    async fn find_category_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;

    /// All categories matching every present clause of `filter`
    async fn query_categories(&self, filter: &CategoryRequest) -> AppResult<Vec<Category>>;

    /// Persist a new product
    async fn insert_product(&self, product: &Product) -> AppResult<Product>;

    /// Find a product by id
    async fn find_product_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// All products matching every present clause of `filter`
    async fn query_products(&self, filter: &ProductRequest) -> AppResult<Vec<Product>>;

    /// Persist the current field values of an existing product
    async fn update_product(&self, product: &Product) -> AppResult<Product>;
}

/// SeaORM-backed implementation of CatalogRepository
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a category filter into a SQL predicate.
///
/// The description clause becomes a `LIKE` prefilter only: `LIKE` ignores
/// case on SQLite, so the exact match is applied after loading.
fn category_condition(filter: &CategoryRequest) -> Condition {
    Condition::all()
        .add_option(filter.ids.clone().map(|ids| category::Column::Id.is_in(ids)))
        .add_option(
            filter
                .names
                .clone()
                .map(|names| category::Column::Name.is_in(names)),
        )
        .add_option(
            filter
                .description_contains
                .as_deref()
                .map(|text| category::Column::Description.contains(text)),
        )
}

/// Translate a product filter into a SQL predicate.
///
/// Prices are stored as text, so the price bounds are left to
/// `ProductRequest::matches` after loading.
fn product_condition(filter: &ProductRequest) -> Condition {
    Condition::all()
        .add_option(filter.ids.clone().map(|ids| product::Column::Id.is_in(ids)))
        .add_option(
            filter
                .names
                .clone()
                .map(|names| product::Column::Name.is_in(names)),
        )
        .add_option(
            filter
                .category_ids
                .clone()
                .map(|ids| product::Column::CategoryId.is_in(ids)),
        )
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn insert_category(&self, category: &Category) -> AppResult<Category> {
        let model = category::ActiveModel::from(category).insert(&self.db).await?;
        Ok(Category::from(model))
    }

    async fn find_category_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Category::from))
    }

    async fn query_categories(&self, filter: &CategoryRequest) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .filter(category_condition(filter))
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(Category::from)
            .filter(|c| filter.matches(c))
            .collect())
    }

    async fn insert_product(&self, product: &Product) -> AppResult<Product> {
        let model = product::ActiveModel::from(product).insert(&self.db).await?;
        Product::try_from(model)
    }

    async fn find_product_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id).one(&self.db).await?;
        result.map(Product::try_from).transpose()
    }

    async fn query_products(&self, filter: &ProductRequest) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product_condition(filter))
            .order_by_asc(product::Column::Name)
            .all(&self.db)
            .await?;

        let products = models
            .into_iter()
            .map(Product::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(products.into_iter().filter(|p| filter.matches(p)).collect())
    }

    async fn update_product(&self, product: &Product) -> AppResult<Product> {
        let model = product::ActiveModel::from(product).update(&self.db).await?;
        Product::try_from(model)
    }
}
