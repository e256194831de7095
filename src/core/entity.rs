//! The Store entity, the single resource managed by the service

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Singular resource name, used in error messages and logs
pub const STORE_ENTITY_TYPE: &str = "store";

/// Current time truncated to microseconds.
///
/// PostgreSQL stores timestamps with microsecond precision; truncating at
/// assignment keeps freshly built records equal to what a re-read returns.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A retail store record.
///
/// Serializes to the read view:
/// `{id, name, address, city, postalCode, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Time-ordered identifier, assigned once at creation
    pub id: Uuid,

    pub name: String,

    pub address: String,

    pub city: String,

    pub postal_code: String,

    /// Set exactly once, when the record is first built for persistence
    pub created_at: DateTime<Utc>,

    /// `None` until the first update
    pub updated_at: Option<DateTime<Utc>>,
}

impl Store {
    /// Build a new record with a fresh identifier and creation timestamp.
    ///
    /// Identifiers are UUIDv7 so that ordering by `id` follows insertion order.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            address: address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            created_at: now(),
            updated_at: None,
        }
    }

    /// Record a mutation.
    ///
    /// The new `updated_at` never goes backwards relative to `created_at` or
    /// a previous `updated_at`, even if the wall clock does.
    pub fn touch(&mut self) {
        let floor = self.updated_at.unwrap_or(self.created_at);
        self.updated_at = Some(now().max(floor));
    }
}
