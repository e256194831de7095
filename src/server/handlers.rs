//! Store HTTP handlers

use super::extractors::{JsonObject, ListQuery, ResolvedStore};
use crate::core::{ApiError, Store, StorePayload, StoreRepository};
use crate::services::{StoreManager, StoreSearch};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use std::sync::Arc;

/// Shared state for the store routes
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn StoreRepository>,
    pub search: StoreSearch,
    pub manager: StoreManager,
}

impl AppState {
    /// Wire both services onto one repository
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self {
            search: StoreSearch::new(repository.clone()),
            manager: StoreManager::new(repository.clone()),
            repository,
        }
    }
}

/// GET /api/stores
pub async fn list_stores(
    State(state): State<AppState>,
    ListQuery(params): ListQuery,
) -> Result<Json<Vec<Store>>, ApiError> {
    let stores = state
        .search
        .search(
            params.filters(),
            params.sort.as_deref(),
            params.direction.as_deref(),
        )
        .await?;

    Ok(Json(stores))
}

/// GET /api/stores/{id}
pub async fn show_store(ResolvedStore(store): ResolvedStore) -> Json<Store> {
    Json(store)
}

/// POST /api/stores
pub async fn create_store(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<Store>), ApiError> {
    let payload = StorePayload::from_object(&body)?;
    let store = state.manager.create(payload).await?;

    Ok((StatusCode::CREATED, Json(store)))
}

/// PATCH /api/stores/{id}
pub async fn update_store(
    State(state): State<AppState>,
    ResolvedStore(store): ResolvedStore,
    JsonObject(body): JsonObject,
) -> Result<Json<Store>, ApiError> {
    let payload = StorePayload::from_object(&body)?;
    let store = state.manager.update(store, payload).await?;

    Ok(Json(store))
}

/// DELETE /api/stores/{id}
pub async fn delete_store(
    State(state): State<AppState>,
    ResolvedStore(store): ResolvedStore,
) -> Result<StatusCode, ApiError> {
    state.manager.delete(store).await?;

    Ok(StatusCode::NO_CONTENT)
}
