//! Category domain entity and related request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Category domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    #[schema(example = "Beverages")]
    pub name: String,
    #[schema(example = "Soft drinks, coffees, teas")]
    pub description: String,
}

impl Category {
    /// Create a new category with a freshly generated id
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
        }
    }
}

impl From<CategoryCreateRequest> for Category {
    fn from(request: CategoryCreateRequest) -> Self {
        Category::new(request.name, request.description)
    }
}

/// Category creation request
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreateRequest {
    /// Category name
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[schema(example = "Beverages", max_length = 255)]
    pub name: String,
    /// Category description
    #[validate(length(max = 10000, message = "Description must be at most 10000 characters"))]
    #[schema(example = "Soft drinks, coffees, teas", max_length = 10000)]
    pub description: String,
}

/// Category filter. Present fields are ANDed; absent fields match everything.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    /// Match any of these ids
    pub ids: Option<Vec<Uuid>>,
    /// Match any of these exact names
    pub names: Option<Vec<String>>,
    /// Description contains this text (case-sensitive)
    #[schema(example = "drinks")]
    pub description_contains: Option<String>,
}

impl CategoryRequest {
    /// Whether `category` satisfies every present clause.
    pub fn matches(&self, category: &Category) -> bool {
        self.ids.as_ref().map_or(true, |ids| ids.contains(&category.id))
            && self
                .names
                .as_ref()
                .map_or(true, |names| names.contains(&category.name))
            && self
                .description_contains
                .as_deref()
                .map_or(true, |text| category.description.contains(text))
    }
}
