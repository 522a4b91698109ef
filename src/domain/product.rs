//! Product domain entity and related request types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product domain entity.
///
/// The category is referenced by id only and is never embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    #[schema(example = "Cold brew")]
    pub name: String,
    #[schema(value_type = String, example = "4.50")]
    pub price: Decimal,
    pub category_id: Uuid,
}

impl Product {
    /// Create a new product with a freshly generated id
    pub fn new(name: String, price: Decimal, category_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            category_id,
        }
    }

    /// Apply a partial update: absent fields keep their current value.
    pub fn apply_update(&mut self, update: ProductUpdateRequest) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
    }
}

impl From<ProductCreateRequest> for Product {
    fn from(request: ProductCreateRequest) -> Self {
        Product::new(request.name, request.price, request.category_id)
    }
}

/// Product creation request
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateRequest {
    /// Product name
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Cold brew", max_length = 255)]
    pub name: String,
    /// Product price
    #[schema(value_type = String, example = "4.50")]
    pub price: Decimal,
    /// Id of an existing category
    pub category_id: Uuid,
}

/// Product filter. Present fields are ANDed; absent fields match everything.
///
/// Both price bounds are exclusive.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Match any of these ids
    pub ids: Option<Vec<Uuid>>,
    /// Match any of these exact names
    pub names: Option<Vec<String>>,
    /// Price strictly greater than this value
    #[schema(value_type = Option<String>, example = "1.00")]
    pub min_price: Option<Decimal>,
    /// Price strictly less than this value
    #[schema(value_type = Option<String>, example = "10.00")]
    pub max_price: Option<Decimal>,
    /// Match any of these category ids
    pub category_ids: Option<Vec<Uuid>>,
}

impl ProductRequest {
    /// Whether `product` satisfies every present clause.
    pub fn matches(&self, product: &Product) -> bool {
        self.ids.as_ref().map_or(true, |ids| ids.contains(&product.id))
            && self
                .names
                .as_ref()
                .map_or(true, |names| names.contains(&product.name))
            && self.min_price.map_or(true, |min| product.price > min)
            && self.max_price.map_or(true, |max| product.price < max)
            && self
                .category_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&product.category_id))
    }
}

/// Partial product update. Absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdateRequest {
    /// Id of the product to update
    pub id: Uuid,
    /// New name
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Iced cold brew", max_length = 255)]
    pub name: Option<String>,
    /// New price
    #[schema(value_type = Option<String>, example = "5.00")]
    pub price: Option<Decimal>,
    /// Id of an existing category to move the product to
    pub category_id: Option<Uuid>,
}

impl ProductUpdateRequest {
    /// Update request that touches nothing but identifies `id`.
    pub fn for_product(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            price: None,
            category_id: None,
        }
    }
}
