//! Store manager: create, update and delete with write-view validation

use crate::core::validation::{check_constraints, require_all_fields};
use crate::core::entity::STORE_ENTITY_TYPE;
use crate::core::{ApiError, EntityError, Store, StorePayload, StoreRepository};
use std::sync::Arc;

/// Write service for store records.
///
/// Timestamps are assigned here rather than by the repository: `created_at`
/// when the record is built, `updated_at` on every update.
#[derive(Clone)]
pub struct StoreManager {
    repository: Arc<dyn StoreRepository>,
}

impl StoreManager {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    /// Create a store.
    ///
    /// All four fields must be present and non-empty; the first missing one,
    /// in declaration order, is reported.
    pub async fn create(&self, payload: StorePayload) -> Result<Store, ApiError> {
        require_all_fields(&payload)?;
        check_constraints(&payload)?;

        let StorePayload {
            name,
            address,
            city,
            postal_code,
        } = payload;
        let store = Store::new(
            name.unwrap_or_default(),
            address.unwrap_or_default(),
            city.unwrap_or_default(),
            postal_code.unwrap_or_default(),
        );

        let store = self.repository.insert(store).await?;

        tracing::info!(store_id = %store.id, "store created");
        Ok(store)
    }

    /// Apply a partial update to `store`.
    ///
    /// Present fields are overwritten, even with an empty string; absent ones
    /// are kept. `updated_at` moves forward on every call, including no-op
    /// payloads. A record removed since it was loaded is reported as not
    /// found.
    pub async fn update(&self, mut store: Store, payload: StorePayload) -> Result<Store, ApiError> {
        check_constraints(&payload)?;

        payload.apply_to(&mut store);
        store.touch();

        let id = store.id;
        let store = self.repository.save(store).await?.ok_or_else(|| {
            ApiError::from(EntityError::NotFound {
                entity_type: STORE_ENTITY_TYPE.to_string(),
                id: id.to_string(),
            })
        })?;

        tracing::info!(store_id = %store.id, "store updated");
        Ok(store)
    }

    /// Remove `store` permanently.
    pub async fn delete(&self, store: Store) -> Result<(), ApiError> {
        self.repository.remove(&store.id).await?;

        tracing::info!(store_id = %store.id, "store deleted");
        Ok(())
    }
}
