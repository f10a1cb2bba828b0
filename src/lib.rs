//! Product inventory REST service
//!
//! Exposes CRUD operations over a single `Product` resource backed by SQLite,
//! organized as transport (api) -> use cases (application) -> repository
//! (infrastructure) layers.

// Module declarations
pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
