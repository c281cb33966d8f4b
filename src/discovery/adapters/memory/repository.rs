//! In-memory repository for discovery service tests and embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::discovery::{
    domain::{DiscoveryId, DiscoveryRecord, Revision},
    ports::{DiscoveryRepository, DiscoveryRepositoryError, DiscoveryRepositoryResult},
};

/// Thread-safe in-memory discovery repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiscoveryRepository {
    state: Arc<RwLock<InMemoryDiscoveryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDiscoveryState {
    records: HashMap<DiscoveryId, DiscoveryRecord>,
    insertion_order: Vec<DiscoveryId>,
}

impl InMemoryDiscoveryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DiscoveryRepositoryResult<RwLockReadGuard<'_, InMemoryDiscoveryState>> {
        self.state.read().map_err(|err| {
            DiscoveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> DiscoveryRepositoryResult<RwLockWriteGuard<'_, InMemoryDiscoveryState>> {
        self.state.write().map_err(|err| {
            DiscoveryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl DiscoveryRepository for InMemoryDiscoveryRepository {
    async fn store(&self, record: &DiscoveryRecord) -> DiscoveryRepositoryResult<()> {
        let mut state = self.write()?;

        if state.records.contains_key(&record.id()) {
            return Err(DiscoveryRepositoryError::DuplicateRecord(record.id()));
        }

        state.insertion_order.push(record.id());
        state.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn update(
        &self,
        record: &DiscoveryRecord,
        expected: Revision,
    ) -> DiscoveryRepositoryResult<()> {
        let mut state = self.write()?;

        let stored = state
            .records
            .get_mut(&record.id())
            .ok_or(DiscoveryRepositoryError::NotFound(record.id()))?;

        if stored.revision() != expected {
            return Err(DiscoveryRepositoryError::ConcurrentModification {
                id: record.id(),
                expected,
            });
        }

        *stored = record.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: DiscoveryId,
    ) -> DiscoveryRepositoryResult<Option<DiscoveryRecord>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    async fn exists(&self, id: DiscoveryId) -> DiscoveryRepositoryResult<bool> {
        Ok(self.read()?.records.contains_key(&id))
    }

    async fn count(&self) -> DiscoveryRepositoryResult<u64> {
        let total = self.read()?.records.len();
        u64::try_from(total).map_err(DiscoveryRepositoryError::persistence)
    }

    async fn list_all(&self) -> DiscoveryRepositoryResult<Vec<DiscoveryRecord>> {
        let state = self.read()?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.records.get(id))
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> DiscoveryRepositoryResult<u64> {
        let mut state = self.write()?;
        let removed = state.records.len();
        state.records.clear();
        state.insertion_order.clear();
        u64::try_from(removed).map_err(DiscoveryRepositoryError::persistence)
    }
}
