//! Auto-discovery record persistence with merge-on-save semantics.
//!
//! Clients submit the tools discovered for an application (code
//! repositories, build jobs, artifacts and so on). The first submission
//! creates a record; later submissions that reference it are merged
//! field by field instead of replacing it. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the merge policy in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
