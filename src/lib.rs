//! Catalog API - products and categories over HTTP
//!
//! A CRUD web API with simple filtering, built on Axum and SeaORM.
//! Every data operation reports through the [`Outcome`] envelope, which the
//! router turns into an HTTP status and body.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Categories, products and their request types
//! - **services**: The data service use cases
//! - **infra**: Database connection, migrations and the catalog store
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: The result envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on the default in-memory database
//! cargo run -- serve
//!
//! # Persist to a file and listen on another port
//! DATABASE_URL="sqlite://catalog.db?mode=rwc" cargo run -- serve --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Category, Product};
pub use errors::{AppError, AppResult};
pub use types::{Outcome, StatusClass};
