//! Product use cases
//!
//! The single service behind the HTTP handlers. Each operation validates its
//! input, maps DTO to entity, delegates to the repository and maps the result
//! back. Partial-update merging lives here rather than in the transport
//! layer so there is exactly one place that knows the merge rules.

use std::sync::Arc;

use tracing::debug;

use crate::application::dto::ProductDto;
use crate::application::error::ServiceError;
use crate::application::mapper;
use crate::domain::repositories::ProductRepository;

pub struct ProductUseCases {
    repository: Arc<dyn ProductRepository>,
}

impl ProductUseCases {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Create a new product and return its persisted representation,
    /// including the store-assigned identifier.
    pub async fn create(&self, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        dto.validate().map_err(ServiceError::Validation)?;

        // The identifier is server-generated; any client-supplied id is ignored.
        let mut product = mapper::to_entity(&dto);
        product.id = None;

        let saved = self.repository.save(&product).await?;
        debug!(id = ?saved.id, "created product");
        Ok(mapper::to_dto(&saved))
    }

    /// Look up a product; a missing row is `Ok(None)`, never an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProductDto>, ServiceError> {
        let product = self.repository.find_by_id(id).await?;
        Ok(product.as_ref().map(mapper::to_dto))
    }

    pub async fn find_all(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let products = self.repository.find_all().await?;
        Ok(mapper::to_dtos(products))
    }

    /// Full update: overwrite every field of an existing product. Fails with
    /// `NotFound` when no row matches; never creates a row.
    pub async fn update(&self, dto: ProductDto) -> Result<ProductDto, ServiceError> {
        let id = dto
            .id
            .ok_or_else(|| ServiceError::Validation("id is required".to_string()))?;
        dto.validate().map_err(ServiceError::Validation)?;

        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        let saved = self.repository.save(&mapper::to_entity(&dto)).await?;
        debug!(id, "updated product");
        Ok(mapper::to_dto(&saved))
    }

    /// Partial update: overwrite only the fields present in the DTO, keep
    /// everything else as stored.
    pub async fn partial_update(
        &self,
        id: i64,
        dto: ProductDto,
    ) -> Result<ProductDto, ServiceError> {
        let mut product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        if let Some(name) = dto.name {
            product.name = name;
        }
        if let Some(description) = dto.description {
            product.description = description;
        }
        if let Some(price) = dto.price {
            product.price = price;
        }
        if let Some(quantity) = dto.quantity {
            product.quantity = quantity;
        }
        if let Some(category) = dto.category {
            product.category = category;
        }

        let saved = self.repository.save(&product).await?;
        debug!(id, "partially updated product");
        Ok(mapper::to_dto(&saved))
    }

    /// Delete by id. A second delete of the same id fails with `NotFound`
    /// rather than an error, so the operation is idempotent in effect.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        self.repository.delete_by_id(id).await?;
        debug!(id, "deleted product");
        Ok(())
    }
}
