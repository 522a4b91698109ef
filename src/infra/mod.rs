//! Infrastructure layer - External systems integration
//!
//! This module handles the storage concerns of the catalog:
//! - Database connection and schema migrations
//! - The catalog repository and its SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{CatalogRepository, CatalogStore};

#[cfg(test)]
pub use repositories::MockCatalogRepository;
