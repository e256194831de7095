//! Route table for the store API

use super::handlers::{
    AppState, create_store, delete_store, list_stores, show_store, update_store,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the store routes:
/// - GET    /api/stores       - List with filters and sorting
/// - POST   /api/stores       - Create
/// - GET    /api/stores/{id}  - Show
/// - PATCH  /api/stores/{id}  - Partial update
/// - DELETE /api/stores/{id}  - Delete
pub fn build_store_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/stores", get(list_stores).post(create_store))
        .route(
            "/api/stores/{id}",
            get(show_store).patch(update_store).delete(delete_store),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "store-api"
    }))
}
