//! Discovery record aggregate root.

use super::{DiscoveryCategories, DiscoveryId, DiscoveryMetadata, Revision};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Submission content before it is bound to a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryDraft {
    /// Application metadata as supplied by the caller.
    pub metadata: DiscoveryMetadata,
    /// Entry lists as supplied by the caller.
    #[serde(default)]
    pub categories: DiscoveryCategories,
}

impl DiscoveryDraft {
    /// Creates a draft from metadata and category lists.
    #[must_use]
    pub const fn new(metadata: DiscoveryMetadata, categories: DiscoveryCategories) -> Self {
        Self {
            metadata,
            categories,
        }
    }
}

/// Persisted auto-discovery results for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryRecord {
    id: DiscoveryId,
    metadata: DiscoveryMetadata,
    categories: DiscoveryCategories,
    revision: Revision,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted discovery record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDiscoveryData {
    /// Persisted record identifier.
    pub id: DiscoveryId,
    /// Persisted application metadata.
    pub metadata: DiscoveryMetadata,
    /// Persisted entry lists.
    pub categories: DiscoveryCategories,
    /// Persisted optimistic-concurrency revision.
    pub revision: Revision,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl DiscoveryRecord {
    /// Creates a new record with a freshly generated identifier.
    ///
    /// The categories are stored as given; callers are expected to have
    /// removed natural-key duplicates.
    #[must_use]
    pub fn new(
        metadata: DiscoveryMetadata,
        categories: DiscoveryCategories,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: DiscoveryId::generate(clock),
            metadata,
            categories,
            revision: Revision::INITIAL,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDiscoveryData) -> Self {
        Self {
            id: data.id,
            metadata: data.metadata,
            categories: data.categories,
            revision: data.revision,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the successor of this record carrying `categories`.
    ///
    /// Identifier, metadata and creation time are carried over unchanged.
    pub(crate) fn succeed(&self, categories: DiscoveryCategories, clock: &impl Clock) -> Self {
        Self {
            id: self.id,
            metadata: self.metadata.clone(),
            categories,
            revision: self.revision.next(),
            created_at: self.created_at,
            updated_at: clock.utc(),
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> DiscoveryId {
        self.id
    }

    /// Returns the application metadata.
    #[must_use]
    pub const fn metadata(&self) -> &DiscoveryMetadata {
        &self.metadata
    }

    /// Returns the entry lists.
    #[must_use]
    pub const fn categories(&self) -> &DiscoveryCategories {
        &self.categories
    }

    /// Returns the optimistic-concurrency revision.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
