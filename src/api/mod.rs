//! HTTP transport layer: routes, handlers, error mapping and hypermedia
//! link generation.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod links;
pub mod models;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
