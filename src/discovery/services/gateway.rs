//! Identifier-aware wrapper around the discovery repository port.

use super::{DiscoveryServiceError, DiscoveryServiceResult};
use crate::discovery::{
    domain::{DiscoveryId, DiscoveryRecord, Revision},
    ports::DiscoveryRepository,
};
use std::sync::Arc;

/// Store gateway that accepts raw identifier strings.
///
/// Identifiers are validated before any I/O. A well-formed identifier that
/// matches nothing is reported as absent, never as an error.
#[derive(Clone)]
pub struct DiscoveryStoreGateway<R>
where
    R: DiscoveryRepository,
{
    repository: Arc<R>,
}

impl<R> DiscoveryStoreGateway<R>
where
    R: DiscoveryRepository,
{
    /// Creates a gateway over `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Parses a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Domain`] wrapping
    /// `InvalidIdentifier` when the value is malformed.
    pub fn parse_id(raw: &str) -> Result<DiscoveryId, DiscoveryServiceError> {
        Ok(DiscoveryId::parse(raw)?)
    }

    /// Loads a record by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Domain`] for malformed identifiers or
    /// [`DiscoveryServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, raw: &str) -> DiscoveryServiceResult<Option<DiscoveryRecord>> {
        let id = Self::parse_id(raw)?;
        self.find(id).await
    }

    /// Reports whether a record exists for a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Domain`] for malformed identifiers or
    /// [`DiscoveryServiceError::Repository`] when the lookup fails.
    pub async fn exists(&self, raw: &str) -> DiscoveryServiceResult<bool> {
        let id = Self::parse_id(raw)?;
        Ok(self.repository.exists(id).await?)
    }

    /// Loads a record by parsed identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when the lookup fails.
    pub async fn find(&self, id: DiscoveryId) -> DiscoveryServiceResult<Option<DiscoveryRecord>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Persists a record.
    ///
    /// `base` is the revision the record was derived from; `None` stores a
    /// brand-new record.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when the write is
    /// rejected.
    pub async fn save(
        &self,
        record: &DiscoveryRecord,
        base: Option<Revision>,
    ) -> DiscoveryServiceResult<()> {
        match base {
            Some(expected) => self.repository.update(record, expected).await?,
            None => self.repository.store(record).await?,
        }
        Ok(())
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when counting fails.
    pub async fn count(&self) -> DiscoveryServiceResult<u64> {
        Ok(self.repository.count().await?)
    }

    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when listing fails.
    pub async fn list_all(&self) -> DiscoveryServiceResult<Vec<DiscoveryRecord>> {
        Ok(self.repository.list_all().await?)
    }
}
