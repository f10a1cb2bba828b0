//! API route definitions

use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;

/// Build the product API router. Paths mirror the original surface verbatim.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products/addProduct", post(handlers::create_product))
        .route("/products/getAllProducts", get(handlers::get_all_products))
        .route("/products/getProduct/:id", get(handlers::get_product))
        .route(
            "/products/deleteProduct/:id",
            delete(handlers::delete_product),
        )
        .route("/products/editProduct/:id", put(handlers::replace_product))
        .route(
            "/products/editProduct/:id",
            patch(handlers::update_product_partial),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
