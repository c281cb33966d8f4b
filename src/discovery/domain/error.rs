//! Error types for discovery domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing discovery domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryDomainError {
    /// The identifier is not a well-formed store identifier.
    #[error("Invalid Auto Discovery Object ID: [{0}] received.")]
    InvalidIdentifier(String),
}

/// Error returned while parsing a discovery status from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown discovery status: {0}")]
pub struct ParseDiscoveryStatusError(pub String);

/// Error returned while parsing a discovery category name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown discovery category: {0}")]
pub struct ParseDiscoveryCategoryError(pub String);

/// Errors raised while building the per-category identity table.
///
/// These are startup failures: a table that fails validation must never
/// reach the merge path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityConfigError {
    /// The configuration names a category that does not exist.
    #[error(transparent)]
    UnknownCategory(#[from] ParseDiscoveryCategoryError),

    /// Two names in the configuration resolve to the same category.
    #[error("identity keys for category '{0}' are configured more than once")]
    DuplicateCategory(String),

    /// An identity option key is empty after trimming.
    #[error("identity option key for category '{0}' must not be empty")]
    EmptyOptionKey(String),

    /// The same identity option key is listed twice for one category.
    #[error("identity option key '{key}' is listed more than once for category '{category}'")]
    DuplicateOptionKey {
        /// Category whose key list is malformed.
        category: String,
        /// The repeated option key.
        key: String,
    },

    /// The configuration document could not be decoded.
    #[error("invalid identity configuration document: {0}")]
    InvalidDocument(String),
}
