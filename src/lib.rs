//! # Store API
//!
//! A REST service managing retail store records.
//!
//! ## Features
//!
//! - **CRUD over HTTP**: `/api/stores` and `/api/stores/{id}` with JSON bodies
//! - **Filtering and Sorting**: exact city and postal code, partial name, whitelisted sort keys
//! - **Validation**: required fields on create, length limits on every write
//! - **Pluggable Storage**: in-memory map or PostgreSQL (`postgres` feature)
//! - **Time-Ordered Ids**: UUIDv7 identifiers sort in creation order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use store_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repository = Arc::new(InMemoryStoreRepository::new());
//!
//!     ServerBuilder::new()
//!         .with_repository(repository)
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod storage;

/// Re-exports of the types most applications need
pub mod prelude {
    pub use crate::config::{ServiceConfig, StorageBackend, StorageConfig};
    pub use crate::core::{
        ApiError, ListParams, SortDirection, SortField, Store, StoreFilters, StorePayload,
        StoreQuery, StoreRepository, ValidationError,
    };
    pub use crate::server::{AppState, ServerBuilder};
    pub use crate::services::{StoreManager, StoreSearch};

    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryStoreRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStoreRepository;

    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
