//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (ephemeral in-memory SQLite)
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

// =============================================================================
// Data Service Messages
// =============================================================================

/// Returned when a category insert fails
pub const MSG_ADD_CATEGORY_FAILED: &str = "Unable to add category.";

/// Returned when a product insert fails
pub const MSG_ADD_PRODUCT_FAILED: &str = "Unable to add product.";

/// Returned when a product update fails
pub const MSG_UPDATE_PRODUCT_FAILED: &str = "Unable to update product.";

/// Returned when a category query fails
pub const MSG_GET_CATEGORIES_FAILED: &str = "Unable to retrieve categories.";

/// Returned when a product query fails
pub const MSG_GET_PRODUCTS_FAILED: &str = "Unable to retrieve products.";
