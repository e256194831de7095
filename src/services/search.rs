//! Store search: request normalization in front of the query component

use crate::core::{
    ApiError, SortDirection, SortField, Store, StoreFilters, StoreQuery, StoreRepository,
};
use std::sync::Arc;

/// Normalizes sort field and direction, then runs the query.
///
/// Invalid sort values are coerced, never rejected; only storage failures
/// surface as errors.
#[derive(Clone)]
pub struct StoreSearch {
    repository: Arc<dyn StoreRepository>,
}

impl StoreSearch {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    /// Build the normalized query for raw request values.
    pub fn normalize(
        filters: StoreFilters,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> StoreQuery {
        StoreQuery::new(
            filters,
            SortField::normalize(sort),
            SortDirection::normalize(direction),
        )
    }

    pub async fn search(
        &self,
        filters: StoreFilters,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> Result<Vec<Store>, ApiError> {
        let query = Self::normalize(filters, sort, direction);
        tracing::debug!(
            sort = ?query.sort,
            direction = ?query.direction,
            filters = ?query.filters,
            "searching stores"
        );

        Ok(self.repository.search(&query).await?)
    }
}
