//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod catalog_repository;
pub(crate) mod entities;

pub use catalog_repository::{CatalogRepository, CatalogStore};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
