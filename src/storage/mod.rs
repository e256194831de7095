//! Storage implementations for different backends

#[cfg(feature = "in-memory")]
pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "in-memory")]
pub use in_memory::InMemoryStoreRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStoreRepository;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::StoreRepository;
use anyhow::Result;
use std::sync::Arc;

/// Open the repository selected by `config`.
///
/// Fails if the backend was not compiled in.
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn StoreRepository>> {
    match config.backend {
        StorageBackend::Memory => connect_memory(),
        StorageBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "in-memory")]
fn connect_memory() -> Result<Arc<dyn StoreRepository>> {
    tracing::info!("Using in-memory storage");
    Ok(Arc::new(InMemoryStoreRepository::new()))
}

#[cfg(not(feature = "in-memory"))]
fn connect_memory() -> Result<Arc<dyn StoreRepository>> {
    anyhow::bail!("in-memory storage requires the `in-memory` feature")
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &StorageConfig) -> Result<Arc<dyn StoreRepository>> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("storage.database_url is required for postgres"))?;

    let repository = PostgresStoreRepository::connect(url, config.max_connections).await?;
    if config.run_migrations {
        repository.migrate().await?;
        tracing::info!("Database migrations applied");
    }

    tracing::info!(max_connections = config.max_connections, "Using PostgreSQL storage");
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &StorageConfig) -> Result<Arc<dyn StoreRepository>> {
    anyhow::bail!("PostgreSQL storage requires the `postgres` feature")
}
