//! Autodiscovery: merge-on-save storage for discovered build-tool entries.
//!
//! Scanners submit the tools they found for an application, grouped into
//! categories such as code repositories, builds and deployments. This crate
//! stores each submission as a record and, when a submission references an
//! existing record, merges the new entries into it instead of replacing it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Entry matching and merge rules with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for record persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Orchestration of validation, merging and persistence
//!
//! # Modules
//!
//! - [`discovery`]: Auto-discovery records, merging and storage

pub mod discovery;
