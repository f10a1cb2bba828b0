//! Application state for the API server

use std::sync::Arc;

use crate::application::use_cases::ProductUseCases;

/// Application state shared across all API handlers.
#[derive(Clone)]
pub struct AppState {
    /// Product use cases
    pub products: Arc<ProductUseCases>,
    /// External base URL for hypermedia links and Location headers
    pub base_url: String,
}

impl AppState {
    pub fn new(products: Arc<ProductUseCases>, base_url: String) -> Self {
        Self { products, base_url }
    }
}
