//! HTTP layer: extractors, handlers, routes and the server builder
//!
//! `ServerBuilder` registers:
//! - the store CRUD routes under `/api/stores`
//! - health check routes

pub mod builder;
pub mod extractors;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
