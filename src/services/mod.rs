//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain validation and the catalog store to fulfill
//! application use cases. They depend on the repository trait, never on a
//! concrete store.

mod data_service;

pub use data_service::{DataManager, DataService};
