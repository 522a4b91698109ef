//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod product;

pub use category::Entity as CategoryEntity;
pub use product::Entity as ProductEntity;
