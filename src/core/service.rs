//! Repository trait for store persistence

use crate::core::entity::Store;
use crate::core::query::StoreQuery;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence for store records
///
/// Implementations are thin pass-throughs to a backend. Each call is one
/// atomic operation; there are no multi-statement transactions.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Persist a new record
    async fn insert(&self, store: Store) -> Result<Store>;

    /// Look up a record by identifier
    async fn find(&self, id: &Uuid) -> Result<Option<Store>>;

    /// Run a normalized filter/sort query
    async fn search(&self, query: &StoreQuery) -> Result<Vec<Store>>;

    /// Write back a mutated record. `None` if it no longer exists.
    async fn save(&self, store: Store) -> Result<Option<Store>>;

    /// Remove a record permanently
    async fn remove(&self, id: &Uuid) -> Result<()>;
}
