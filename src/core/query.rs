//! Filter and sort parameters for listing stores

use super::entity::Store;
use std::cmp::Ordering;

/// Query string accepted by the list endpoint
///
/// Every parameter is optional; absent parameters stay `None` all the way to
/// the search service.
///
/// # Example
/// ```text
/// GET /api/stores?city=Paris&name=Shop&sort=name&direction=DESC
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Exact city match
    pub city: Option<String>,

    /// Substring of the store name
    pub name: Option<String>,

    /// Exact postal code match
    pub postal_code: Option<String>,

    /// Sort field: `name`, `city`, `createdAt` or `updatedAt`
    pub sort: Option<String>,

    /// `ASC` or `DESC`, case-insensitive
    pub direction: Option<String>,
}

impl ListParams {
    /// Collect the recognized keys from decoded query pairs.
    ///
    /// A repeated key keeps its last value. Unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "city" => &mut params.city,
                "name" => &mut params.name,
                "postalCode" => &mut params.postal_code,
                "sort" => &mut params.sort,
                "direction" => &mut params.direction,
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }

    pub fn filters(&self) -> StoreFilters {
        StoreFilters {
            city: self.city.clone(),
            name: self.name.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// Optional predicates narrowing a list query. All active filters are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFilters {
    pub city: Option<String>,
    pub name: Option<String>,
    pub postal_code: Option<String>,
}

impl StoreFilters {
    /// City filter, if set and non-empty
    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    /// Name filter, if set and non-empty
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// Postal code filter, if set and non-empty
    pub fn postal_code(&self) -> Option<&str> {
        non_empty(&self.postal_code)
    }

    /// Whether `store` satisfies every active filter
    pub fn matches(&self, store: &Store) -> bool {
        self.city().is_none_or(|city| store.city == city)
            && self.name().is_none_or(|name| store.name.contains(name))
            && self.postal_code().is_none_or(|code| store.postal_code == code)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Sortable columns.
///
/// A closed set: request values are mapped onto it before any query is
/// built, so column names never come from user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Name,
    City,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Map a request value onto a sort field.
    ///
    /// Anything outside `name`, `city`, `createdAt`, `updatedAt` (including
    /// `id` itself) sorts by `id`.
    pub fn normalize(value: Option<&str>) -> Self {
        match value {
            Some("name") => SortField::Name,
            Some("city") => SortField::City,
            Some("createdAt") => SortField::CreatedAt,
            Some("updatedAt") => SortField::UpdatedAt,
            _ => SortField::Id,
        }
    }

    /// Column name in the `stores` table
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::City => "city",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }

    /// Ascending comparison on this field.
    ///
    /// A missing `updated_at` sorts after every timestamp, as in PostgreSQL.
    pub fn compare(self, a: &Store, b: &Store) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::City => a.city.cmp(&b.city),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => match (a.updated_at, b.updated_at) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Uppercase the request value; anything but `ASC` or `DESC` is `ASC`.
    pub fn normalize(value: Option<&str>) -> Self {
        match value.map(str::to_uppercase).as_deref() {
            Some("DESC") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A fully normalized read query against the store collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreQuery {
    pub filters: StoreFilters,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl StoreQuery {
    pub fn new(filters: StoreFilters, sort: SortField, direction: SortDirection) -> Self {
        Self {
            filters,
            sort,
            direction,
        }
    }

    /// Ordering of two stores under this query.
    ///
    /// Ties on the sort field fall back to ascending `id`.
    pub fn compare(&self, a: &Store, b: &Store) -> Ordering {
        let primary = match self.direction {
            SortDirection::Asc => self.sort.compare(a, b),
            SortDirection::Desc => self.sort.compare(b, a),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }

    /// Filter and order `stores` in memory.
    pub fn apply(&self, stores: impl IntoIterator<Item = Store>) -> Vec<Store> {
        let mut result: Vec<Store> = stores
            .into_iter()
            .filter(|s| self.filters.matches(s))
            .collect();
        result.sort_by(|a, b| self.compare(a, b));
        result
    }
}
