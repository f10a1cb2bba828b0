//! Product API handlers
//!
//! Each handler parses the request, delegates to the use cases and shapes
//! the HTTP response; merge and validation rules live in the service layer.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::JsonBody;
use crate::api::links;
use crate::api::models::LinkedProduct;
use crate::api::state::AppState;
use crate::application::dto::ProductDto;

/// Create a new product.
///
/// 201 with a Location header pointing at the new resource; 422 on
/// validation failure, 400 on a store constraint violation.
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ApiResult<impl IntoResponse> {
    let created = state.products.create(dto).await?;
    let id = created
        .id
        .ok_or_else(|| ApiError::Internal("created product has no id".to_string()))?;

    let location = links::product_href(&state.base_url, id);
    let body = LinkedProduct::new(created, &state.base_url);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    ))
}

/// Get all registered products.
///
/// An empty store is reported as 404, not an empty list; existing clients
/// depend on that behavior.
pub async fn get_all_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LinkedProduct>>> {
    let products = state.products.find_all().await?;
    if products.is_empty() {
        return Err(ApiError::NotFound("No products found".to_string()));
    }

    let body = products
        .into_iter()
        .map(|product| LinkedProduct::new(product, &state.base_url))
        .collect();
    Ok(Json(body))
}

/// Get a product by id.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LinkedProduct>> {
    match state.products.find_by_id(id).await? {
        Some(product) => Ok(Json(LinkedProduct::new(product, &state.base_url))),
        None => Err(ApiError::NotFound(format!("No product found: {id}"))),
    }
}

/// Delete a product by id.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace all fields of a product. The path id wins over any id in the
/// payload.
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(mut dto): JsonBody<ProductDto>,
) -> ApiResult<Json<LinkedProduct>> {
    if dto.id.is_some_and(|body_id| body_id != id) {
        warn!(path_id = id, body_id = ?dto.id, "ignoring body id on full update");
    }
    dto.id = Some(id);

    let updated = state.products.update(dto).await?;
    Ok(Json(LinkedProduct::new(updated, &state.base_url)))
}

/// Partially update a product: only fields present in the body are
/// overwritten.
pub async fn update_product_partial(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(dto): JsonBody<ProductDto>,
) -> ApiResult<Json<LinkedProduct>> {
    let merged = state.products.partial_update(id, dto).await?;
    Ok(Json(LinkedProduct::new(merged, &state.base_url)))
}
