//! `PostgreSQL` adapters for discovery record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{DiscoveryPgPool, PostgresDiscoveryRepository};
