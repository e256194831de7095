//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStoreRepository`, backed by a `sqlx::PgPool` and the
//! `stores` table created by the migrations in `./migrations`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! store-api = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::{Store, StoreQuery, StoreRepository};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const STORE_COLUMNS: &str = "id, name, address, city, postal_code, created_at, updated_at";

const INSERT_STORE: &str = "INSERT INTO stores \
     (id, name, address, city, postal_code, created_at, updated_at) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) \
     RETURNING id, name, address, city, postal_code, created_at, updated_at";

const SELECT_STORE: &str = "SELECT id, name, address, city, postal_code, created_at, updated_at \
     FROM stores WHERE id = $1";

const UPDATE_STORE: &str = "UPDATE stores \
     SET name = $2, address = $3, city = $4, postal_code = $5, updated_at = $6 \
     WHERE id = $1 \
     RETURNING id, name, address, city, postal_code, created_at, updated_at";

/// Store repository backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// let repository = PostgresStoreRepository::connect("postgres://localhost/stores", 5).await?;
/// repository.migrate().await?;
/// let store = repository.insert(Store::new("Wshop", "1 rue de la Paix", "Paris", "75001")).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    /// Create a repository over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool and wrap it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| anyhow!("Failed to connect to PostgreSQL: {}", e))?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded schema migrations (idempotent).
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;

        Ok(())
    }

    /// Build the SELECT for a normalized query.
    ///
    /// Filter values are always bound; the ORDER BY column comes from the
    /// closed `SortField` set.
    fn build_search(query: &StoreQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {STORE_COLUMNS} FROM stores WHERE TRUE"));

        if let Some(city) = query.filters.city() {
            builder.push(" AND city = ").push_bind(city.to_string());
        }

        if let Some(name) = query.filters.name() {
            builder
                .push(" AND name LIKE ")
                .push_bind(format!("%{}%", escape_like(name)));
        }

        if let Some(postal_code) = query.filters.postal_code() {
            builder
                .push(" AND postal_code = ")
                .push_bind(postal_code.to_string());
        }

        builder
            .push(" ORDER BY ")
            .push(query.sort.column())
            .push(" ")
            .push(query.direction.as_sql())
            .push(", id ASC");

        builder
    }
}

/// Escape LIKE metacharacters so the input matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn insert(&self, store: Store) -> Result<Store> {
        sqlx::query_as::<_, Store>(INSERT_STORE)
            .bind(store.id)
            .bind(&store.name)
            .bind(&store.address)
            .bind(&store.city)
            .bind(&store.postal_code)
            .bind(store.created_at)
            .bind(store.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to create store: {}", e))
    }

    async fn find(&self, id: &Uuid) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(SELECT_STORE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to get store: {}", e))
    }

    async fn search(&self, query: &StoreQuery) -> Result<Vec<Store>> {
        let mut builder = Self::build_search(query);
        builder
            .build_query_as::<Store>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to search stores: {}", e))
    }

    async fn save(&self, store: Store) -> Result<Option<Store>> {
        sqlx::query_as::<_, Store>(UPDATE_STORE)
            .bind(store.id)
            .bind(&store.name)
            .bind(&store.address)
            .bind(&store.city)
            .bind(&store.postal_code)
            .bind(store.updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to update store: {}", e))
    }

    async fn remove(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete store: {}", e))?;

        Ok(())
    }
}
