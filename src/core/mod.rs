//! Core types: the store entity, its write view, queries, errors and the
//! repository seam

pub mod entity;
pub mod error;
pub mod payload;
pub mod query;
pub mod service;
pub mod validation;

pub use entity::Store;
pub use error::{ApiError, EntityError, RequestError, StorageError, ValidationError};
pub use payload::{StorePayload, WriteField};
pub use query::{ListParams, SortDirection, SortField, StoreFilters, StoreQuery};
pub use service::StoreRepository;
