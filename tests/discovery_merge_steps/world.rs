//! Shared world state for auto-discovery merge BDD scenarios.

use std::sync::Arc;

use autodiscovery::discovery::{
    adapters::memory::InMemoryDiscoveryRepository,
    domain::{
        DiscoveredEntry, DiscoveryCategory, DiscoveryId, DiscoveryMetadata, DiscoveryRecord,
        DiscoveryStatus,
    },
    services::{DiscoveryService, DiscoveryServiceError, SaveDiscoveryRequest},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestDiscoveryService = DiscoveryService<InMemoryDiscoveryRepository, DefaultClock>;

/// Scenario world for auto-discovery merge behaviour tests.
pub struct DiscoveryWorld {
    /// The discovery service under test.
    pub service: TestDiscoveryService,
    /// Submissions queued for saving.
    pub pending: Vec<SaveDiscoveryRequest>,
    /// Identifiers returned by successful saves, in order.
    pub saved_ids: Vec<DiscoveryId>,
    /// Error returned by the last failed save.
    pub last_error: Option<DiscoveryServiceError>,
}

impl DiscoveryWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let service = DiscoveryService::new(
            Arc::new(InMemoryDiscoveryRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            pending: Vec::new(),
            saved_ids: Vec::new(),
            last_error: None,
        }
    }

    /// Returns the identifier of the most recent successful save.
    pub fn last_id(&self) -> Result<DiscoveryId, eyre::Report> {
        self.saved_ids
            .last()
            .copied()
            .ok_or_else(|| eyre::eyre!("no record has been saved in this scenario"))
    }

    /// Loads the most recently saved record.
    pub fn last_record(&self) -> Result<DiscoveryRecord, eyre::Report> {
        let id = self.last_id()?;
        run_async(self.service.find_by_id(&id.to_hex()))
            .map_err(|err| eyre::eyre!("lookup failed: {err}"))?
            .ok_or_else(|| eyre::eyre!("record {id} is missing from the store"))
    }
}

impl Default for DiscoveryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds metadata for the named application.
pub fn metadata(application: &str) -> DiscoveryMetadata {
    DiscoveryMetadata::new(application)
        .with_template("template")
        .with_title("testAUTO_DISCOVERY")
        .with_kind("Team")
}

/// Builds the code repository entry used across scenarios.
pub fn code_repo_entry(tool: &str) -> DiscoveredEntry {
    DiscoveredEntry::new(tool, DiscoveryStatus::UserRejected)
        .with_description("Hygieia GitHub")
        .with_option("branch", "master")
        .with_option("url", "https://github.com/Hygieia")
}

/// Builds the artifact entry used across scenarios.
pub fn artifact_entry(tool: &str) -> DiscoveredEntry {
    DiscoveredEntry::new(tool, DiscoveryStatus::UserRejected)
        .with_description("Hygieia Artifactory")
        .with_option("path", "some/path")
        .with_option("artifactName", "HygieiaArtifactory")
        .with_option("instanceUrl", "http://www.artifact.com")
}

/// Builds a submission with one entry in `category`.
pub fn single_entry_request(
    application: &str,
    category: DiscoveryCategory,
    entry: DiscoveredEntry,
) -> SaveDiscoveryRequest {
    SaveDiscoveryRequest::new(metadata(application)).with_entries(category, [entry])
}
