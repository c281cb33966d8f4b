//! Service layer for saving auto-discovery submissions.
//!
//! Provides [`DiscoveryService`], which decides between creating a new
//! record and merging into an existing one, then persists the result with a
//! single write.

use super::{DiscoveryServiceConfig, DiscoveryStoreGateway};
use crate::discovery::{
    domain::{
        DiscoveredEntry, DiscoveryCategories, DiscoveryCategory, DiscoveryDomainError,
        DiscoveryDraft, DiscoveryId, DiscoveryMetadata, DiscoveryRecord, RecordMerger,
    },
    ports::{DiscoveryRepository, DiscoveryRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for saving an auto-discovery submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveDiscoveryRequest {
    metadata: DiscoveryMetadata,
    categories: DiscoveryCategories,
    discovery_id: Option<String>,
}

impl SaveDiscoveryRequest {
    /// Creates a request with metadata and no entries.
    #[must_use]
    pub fn new(metadata: DiscoveryMetadata) -> Self {
        Self {
            metadata,
            categories: DiscoveryCategories::new(),
            discovery_id: None,
        }
    }

    /// Sets the entries of one category.
    #[must_use]
    pub fn with_entries(
        mut self,
        category: DiscoveryCategory,
        entries: impl IntoIterator<Item = DiscoveredEntry>,
    ) -> Self {
        self.categories = self.categories.with(category, entries);
        self
    }

    /// Replaces all category lists.
    #[must_use]
    pub fn with_categories(mut self, categories: DiscoveryCategories) -> Self {
        self.categories = categories;
        self
    }

    /// References an existing record by its raw identifier.
    #[must_use]
    pub fn with_discovery_id(mut self, discovery_id: impl Into<String>) -> Self {
        self.discovery_id = Some(discovery_id.into());
        self
    }

    /// Returns the raw identifier, if one was supplied.
    #[must_use]
    pub fn discovery_id(&self) -> Option<&str> {
        self.discovery_id.as_deref()
    }
}

/// Service-level errors for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DiscoveryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DiscoveryRepositoryError),
}

impl DiscoveryServiceError {
    /// Returns `true` when the error reports a lost optimistic-concurrency
    /// race.
    #[must_use]
    pub const fn is_concurrent_modification(&self) -> bool {
        matches!(
            self,
            Self::Repository(DiscoveryRepositoryError::ConcurrentModification { .. })
        )
    }
}

/// Result type for discovery service operations.
pub type DiscoveryServiceResult<T> = Result<T, DiscoveryServiceError>;

/// Merge-on-save orchestration service for discovery records.
///
/// The load-merge-save sequence is not atomic in the store. Each update is
/// conditional on the revision that was loaded; when another writer got
/// there first the service reloads and merges again, up to
/// [`DiscoveryServiceConfig::max_merge_attempts`] times.
#[derive(Clone)]
pub struct DiscoveryService<R, C>
where
    R: DiscoveryRepository,
    C: Clock + Send + Sync,
{
    gateway: DiscoveryStoreGateway<R>,
    clock: Arc<C>,
    config: DiscoveryServiceConfig,
}

impl<R, C> DiscoveryService<R, C>
where
    R: DiscoveryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a discovery service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_config(repository, clock, DiscoveryServiceConfig::default())
    }

    /// Creates a discovery service with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        repository: Arc<R>,
        clock: Arc<C>,
        config: DiscoveryServiceConfig,
    ) -> Self {
        Self {
            gateway: DiscoveryStoreGateway::new(repository),
            clock,
            config,
        }
    }

    /// Returns the store gateway used by this service.
    #[must_use]
    pub const fn gateway(&self) -> &DiscoveryStoreGateway<R> {
        &self.gateway
    }

    /// Saves a submission and returns the identifier of the persisted
    /// record.
    ///
    /// Without an identifier, or with one that matches no record, a new
    /// record is created. Otherwise the submission is merged into the
    /// existing record and the existing identifier is returned. An empty
    /// identifier counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Domain`] when the identifier is
    /// malformed (nothing is read or written in that case) and
    /// [`DiscoveryServiceError::Repository`] when the store fails or the
    /// concurrency retries are exhausted.
    #[tracing::instrument(
        name = "discovery.save",
        skip_all,
        fields(discovery_id = request.discovery_id().unwrap_or_default())
    )]
    pub async fn save(&self, request: SaveDiscoveryRequest) -> DiscoveryServiceResult<DiscoveryId> {
        let SaveDiscoveryRequest {
            metadata,
            categories,
            discovery_id,
        } = request;

        let requested = discovery_id
            .filter(|raw| !raw.is_empty())
            .map(|raw| DiscoveryStoreGateway::<R>::parse_id(&raw))
            .transpose()?;
        let draft = DiscoveryDraft::new(metadata, categories);

        match requested {
            Some(id) => self.merge_into(id, draft).await,
            None => self.create(draft).await,
        }
    }

    /// Finds a record by raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Domain`] for malformed identifiers or
    /// [`DiscoveryServiceError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, raw: &str) -> DiscoveryServiceResult<Option<DiscoveryRecord>> {
        self.gateway.find_by_id(raw).await
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when counting fails.
    pub async fn count(&self) -> DiscoveryServiceResult<u64> {
        self.gateway.count().await
    }

    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryServiceError::Repository`] when listing fails.
    pub async fn list_all(&self) -> DiscoveryServiceResult<Vec<DiscoveryRecord>> {
        self.gateway.list_all().await
    }

    async fn create(&self, draft: DiscoveryDraft) -> DiscoveryServiceResult<DiscoveryId> {
        let record = self.merger().create(draft, &*self.clock);
        self.gateway.save(&record, None).await?;
        info!(
            discovery_id = %record.id(),
            entries = record.categories().total_entries(),
            "Created discovery record"
        );
        Ok(record.id())
    }

    async fn merge_into(
        &self,
        id: DiscoveryId,
        draft: DiscoveryDraft,
    ) -> DiscoveryServiceResult<DiscoveryId> {
        let max_attempts = self.config.max_merge_attempts.max(1);
        let mut attempt = 1_u32;
        loop {
            let Some(existing) = self.gateway.find(id).await? else {
                debug!(
                    discovery_id = %id,
                    "Referenced discovery record not found, creating new record"
                );
                return self.create(draft).await;
            };

            let merged = self.merger().merge(&existing, &draft, &*self.clock);
            match self.gateway.save(&merged, Some(existing.revision())).await {
                Ok(()) => {
                    info!(
                        discovery_id = %id,
                        revision = %merged.revision(),
                        "Merged submission into discovery record"
                    );
                    return Ok(id);
                }
                Err(DiscoveryServiceError::Repository(DiscoveryRepositoryError::NotFound(_))) => {
                    debug!(
                        discovery_id = %id,
                        "Discovery record removed during merge, creating new record"
                    );
                    return self.create(draft).await;
                }
                Err(err) if err.is_concurrent_modification() && attempt < max_attempts => {
                    warn!(
                        discovery_id = %id,
                        attempt,
                        "Discovery record changed during merge, retrying"
                    );
                    attempt = attempt.saturating_add(1);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn merger(&self) -> RecordMerger<'_> {
        RecordMerger::new(&self.config.identity)
    }
}
