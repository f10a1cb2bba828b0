//! Data Transfer Objects for the product inventory domain
//!
//! The DTO mirrors the `Product` entity field for field. Every non-id field
//! is optional so that the same shape serves create, replace and partial
//! update; on partial updates absence means "leave unchanged". A field set
//! to `null` and an omitted field both deserialize to `None` and are not
//! distinguished.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub category: Option<String>,
}

impl ProductDto {
    /// Check that every field a create or full update requires is present.
    ///
    /// Quantity being non-negative is a domain convention, not enforced here.
    pub fn validate(&self) -> Result<(), String> {
        match self.name.as_deref() {
            None => return Err("name is required".to_string()),
            Some(name) if name.trim().is_empty() => {
                return Err("name cannot be empty".to_string());
            }
            Some(_) => {}
        }
        if self.description.is_none() {
            return Err("description is required".to_string());
        }
        if self.price.is_none() {
            return Err("price is required".to_string());
        }
        if self.quantity.is_none() {
            return Err("quantity is required".to_string());
        }
        if self.category.is_none() {
            return Err("category is required".to_string());
        }
        Ok(())
    }
}
