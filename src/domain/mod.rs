//! Domain layer: the persisted `Product` entity and repository interfaces.

pub mod product;
pub mod repositories;

pub use product::Product;
pub use repositories::ProductRepository;
