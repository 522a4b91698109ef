//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{CatalogStore, Database};
use crate::services::{DataManager, DataService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Catalog use cases
    pub data_service: Arc<dyn DataService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed store and data service onto `database`.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(CatalogStore::new(database.get_connection()));
        let data_service = Arc::new(DataManager::new(store));

        Self {
            data_service,
            database,
        }
    }

    /// Create new application state with a manually injected service.
    pub fn new(data_service: Arc<dyn DataService>, database: Arc<Database>) -> Self {
        Self {
            data_service,
            database,
        }
    }
}
