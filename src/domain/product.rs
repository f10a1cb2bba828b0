use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted product entity.
///
/// The identifier is assigned by the store on first save and immutable
/// afterwards; `None` marks an entity that has not been persisted yet.
/// Quantity is non-negative by domain convention but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
    pub category: String,
}
