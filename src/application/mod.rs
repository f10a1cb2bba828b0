//! Application layer: DTOs, entity/DTO mapping, and product use cases.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod use_cases;

pub use dto::ProductDto;
pub use error::ServiceError;
pub use use_cases::ProductUseCases;
