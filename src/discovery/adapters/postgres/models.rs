//! Diesel row models for discovery record persistence.

use super::schema::discovery_records;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for discovery records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = discovery_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DiscoveryRecordRow {
    /// Record identifier.
    pub id: String,
    /// Application metadata JSON payload.
    pub metadata: Value,
    /// Category entry lists JSON payload.
    pub categories: Value,
    /// Optimistic-concurrency revision.
    pub revision: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for discovery records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = discovery_records)]
pub struct NewDiscoveryRecordRow {
    /// Record identifier.
    pub id: String,
    /// Application metadata JSON payload.
    pub metadata: Value,
    /// Category entry lists JSON payload.
    pub categories: Value,
    /// Optimistic-concurrency revision.
    pub revision: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
