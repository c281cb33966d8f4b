//! Shared test helpers for in-memory integration tests.

use autodiscovery::discovery::{
    adapters::memory::InMemoryDiscoveryRepository,
    domain::{DiscoveredEntry, DiscoveryCategory, DiscoveryMetadata, DiscoveryStatus},
    services::{DiscoveryService, SaveDiscoveryRequest},
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Service type used by in-memory discovery tests.
pub type TestDiscoveryService = DiscoveryService<InMemoryDiscoveryRepository, DefaultClock>;

/// Service under test plus direct access to its store.
pub struct DiscoveryContext {
    /// Discovery service backed by `repository`.
    pub service: TestDiscoveryService,
    /// Store shared with the service.
    pub repository: Arc<InMemoryDiscoveryRepository>,
}

/// Provides a fresh service and store for each test.
#[fixture]
pub fn context() -> DiscoveryContext {
    let repository = Arc::new(InMemoryDiscoveryRepository::new());
    let service = DiscoveryService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    DiscoveryContext {
        service,
        repository,
    }
}

/// Metadata for the `DummyApp` product dashboard.
pub fn dummy_metadata() -> DiscoveryMetadata {
    DiscoveryMetadata::new("DummyApp")
        .with_business_application("BizApp11222333")
        .with_business_service("BizApp334440")
        .with_template("template")
        .with_title("testAUTO_DISCOVERY")
        .with_kind("Product")
}

/// GitHub code repository entry.
pub fn github_entry(status: DiscoveryStatus) -> DiscoveredEntry {
    DiscoveredEntry::new("GitHub", status)
        .with_description("Hygieia GitHub")
        .with_option("branch", "master")
        .with_option("url", "https://github.com/Hygieia")
}

/// Artifactory artifact entry.
pub fn artifactory_entry(status: DiscoveryStatus) -> DiscoveredEntry {
    DiscoveredEntry::new("Artifactory", status)
        .with_description("Hygieia Artifactory")
        .with_option("path", "some/path")
        .with_option("artifactName", "HygieiaArtifactory")
        .with_option("instanceUrl", "http://www.artifact.com")
}

/// Product dashboard submission with one code repository.
pub fn dummy_app_request() -> SaveDiscoveryRequest {
    SaveDiscoveryRequest::new(dummy_metadata())
        .with_entries(
            DiscoveryCategory::CodeRepo,
            [github_entry(DiscoveryStatus::UserRejected)],
        )
}

/// Team dashboard submission with one code repository.
pub fn hygieia_app_request() -> SaveDiscoveryRequest {
    SaveDiscoveryRequest::new(
        DiscoveryMetadata::new("HygieiaApp")
            .with_business_application("BizApp12345678")
            .with_business_service("BizApp123456")
            .with_template("template")
            .with_title("testAUTO_DISCOVERY")
            .with_kind("Team"),
    )
    .with_entries(
        DiscoveryCategory::CodeRepo,
        [github_entry(DiscoveryStatus::UserRejected)],
    )
}

/// Team dashboard submission with a code repository and an artifact.
pub fn named_app_request() -> SaveDiscoveryRequest {
    SaveDiscoveryRequest::new(
        DiscoveryMetadata::new("ApplicationNameStr")
            .with_business_application("BusinessApplicationStr")
            .with_business_service("BusinessServiceStr")
            .with_template("template")
            .with_title("testTitle")
            .with_kind("Team"),
    )
    .with_entries(
        DiscoveryCategory::CodeRepo,
        [github_entry(DiscoveryStatus::UserRejected)],
    )
    .with_entries(
        DiscoveryCategory::Artifact,
        [artifactory_entry(DiscoveryStatus::UserRejected)],
    )
}
