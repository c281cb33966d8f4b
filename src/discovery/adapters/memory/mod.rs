//! In-memory adapters for discovery persistence.

mod repository;

pub use repository::InMemoryDiscoveryRepository;
