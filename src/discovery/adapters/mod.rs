//! Adapter implementations for discovery record persistence.

pub mod memory;
pub mod postgres;
