//! Product database entity for SeaORM.
//!
//! `category_id` is a plain column: category existence is checked by the
//! data service, not by a foreign key. `price` holds the decimal's canonical
//! text so that no backend rounds it or drops its scale.

use std::str::FromStr;

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Product;
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub price: String,
    pub category_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Product {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&model.price).map_err(|e| {
            AppError::persistence(format!(
                "product {} has unreadable price {:?}: {}",
                model.id, model.price, e
            ))
        })?;

        Ok(Product {
            id: model.id,
            name: model.name,
            price,
            category_id: model.category_id,
        })
    }
}

/// Convert domain entity to a fully-set active model
impl From<&Product> for ActiveModel {
    fn from(product: &Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            price: Set(product.price.to_string()),
            category_id: Set(product.category_id),
        }
    }
}
