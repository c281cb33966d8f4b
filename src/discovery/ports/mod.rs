//! Port contracts for discovery record persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the discovery
//! service.

pub mod repository;

pub use repository::{DiscoveryRepository, DiscoveryRepositoryError, DiscoveryRepositoryResult};
