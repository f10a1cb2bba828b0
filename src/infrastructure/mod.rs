//! Infrastructure layer: configuration, logging, database access and the
//! SQLite-backed repository implementation.

pub mod config;
pub mod database_connection;
pub mod logging;
pub mod product_repository;

pub use config::{AppConfig, ConfigManager};
pub use database_connection::DatabaseConnection;
pub use product_repository::SqliteProductRepository;
