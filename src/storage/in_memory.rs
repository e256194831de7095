//! In-memory implementation of StoreRepository for testing and development

use crate::core::{Store, StoreQuery, StoreRepository};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory store repository
///
/// Uses RwLock for thread-safe access. Clones share the same records.
#[derive(Clone)]
pub struct InMemoryStoreRepository {
    stores: Arc<RwLock<HashMap<Uuid, Store>>>,
}

impl InMemoryStoreRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            stores: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn insert(&self, store: Store) -> Result<Store> {
        let mut stores = self
            .stores
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if stores.contains_key(&store.id) {
            return Err(anyhow!("Store already exists: {}", store.id));
        }
        stores.insert(store.id, store.clone());

        Ok(store)
    }

    async fn find(&self, id: &Uuid) -> Result<Option<Store>> {
        let stores = self
            .stores
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(stores.get(id).cloned())
    }

    async fn search(&self, query: &StoreQuery) -> Result<Vec<Store>> {
        let stores = self
            .stores
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(query.apply(stores.values().cloned()))
    }

    async fn save(&self, store: Store) -> Result<Option<Store>> {
        let mut stores = self
            .stores
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(slot) = stores.get_mut(&store.id) else {
            return Ok(None);
        };
        *slot = store.clone();

        Ok(Some(store))
    }

    async fn remove(&self, id: &Uuid) -> Result<()> {
        let mut stores = self
            .stores
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        stores.remove(id);

        Ok(())
    }
}
