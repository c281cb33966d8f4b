//! Repository port for discovery record persistence and lookup.

use crate::discovery::domain::{DiscoveryId, DiscoveryRecord, Revision};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for discovery repository operations.
pub type DiscoveryRepositoryResult<T> = Result<T, DiscoveryRepositoryError>;

/// Discovery record persistence contract.
#[async_trait]
pub trait DiscoveryRepository: Send + Sync {
    /// Stores a new discovery record.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryRepositoryError::DuplicateRecord`] when the
    /// identifier already exists.
    async fn store(&self, record: &DiscoveryRecord) -> DiscoveryRepositoryResult<()>;

    /// Replaces a stored record, provided its stored revision still equals
    /// `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryRepositoryError::NotFound`] when the record does not
    /// exist or [`DiscoveryRepositoryError::ConcurrentModification`] when
    /// another writer advanced the revision first.
    async fn update(
        &self,
        record: &DiscoveryRecord,
        expected: Revision,
    ) -> DiscoveryRepositoryResult<()>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(
        &self,
        id: DiscoveryId,
    ) -> DiscoveryRepositoryResult<Option<DiscoveryRecord>>;

    /// Returns whether a record with the identifier exists.
    async fn exists(&self, id: DiscoveryId) -> DiscoveryRepositoryResult<bool>;

    /// Returns the number of stored records.
    async fn count(&self) -> DiscoveryRepositoryResult<u64>;

    /// Returns every stored record in creation order.
    async fn list_all(&self) -> DiscoveryRepositoryResult<Vec<DiscoveryRecord>>;

    /// Removes every stored record and returns how many were removed.
    ///
    /// Administrative operation; the discovery service never calls it.
    async fn delete_all(&self) -> DiscoveryRepositoryResult<u64>;
}

/// Errors returned by discovery repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DiscoveryRepositoryError {
    /// A record with the same identifier already exists.
    #[error("duplicate discovery record identifier: {0}")]
    DuplicateRecord(DiscoveryId),

    /// The record was not found.
    #[error("discovery record not found: {0}")]
    NotFound(DiscoveryId),

    /// The stored revision no longer matches the revision the write was
    /// based on.
    #[error("discovery record {id} was modified concurrently (expected revision {expected})")]
    ConcurrentModification {
        /// Record identifier.
        id: DiscoveryId,
        /// Revision the rejected write was based on.
        expected: Revision,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DiscoveryRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
