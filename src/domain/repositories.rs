//! Repository interfaces for product persistence
//!
//! Contains trait definitions for the store primitives the service layer
//! builds on: find by id, find all, save, delete by id, exists by id.

use async_trait::async_trait;

use crate::domain::product::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a product. Inserts and returns the row with its assigned id
    /// when `product.id` is `None`, otherwise overwrites the row in place.
    async fn save(&self, product: &Product) -> Result<Product, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, sqlx::Error>;

    /// Every row, ordering store-determined.
    async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error>;

    /// Returns whether a row was actually removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;
}
