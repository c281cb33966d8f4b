//! Application services for auto-discovery persistence.

mod config;
mod discovery;
mod gateway;

pub use config::DiscoveryServiceConfig;
pub use discovery::{
    DiscoveryService, DiscoveryServiceError, DiscoveryServiceResult, SaveDiscoveryRequest,
};
pub use gateway::DiscoveryStoreGateway;
