//! Configuration for the discovery service.

use crate::discovery::domain::CategoryIdentityConfig;

/// Default number of load-merge-save attempts per save.
const DEFAULT_MAX_MERGE_ATTEMPTS: u32 = 3;

/// Settings fixed when the discovery service is constructed.
///
/// # Examples
///
/// ```rust
/// use autodiscovery::discovery::services::DiscoveryServiceConfig;
///
/// let config = DiscoveryServiceConfig::default();
/// assert_eq!(config.max_merge_attempts, 3);
///
/// let strict = DiscoveryServiceConfig::single_attempt();
/// assert_eq!(strict.max_merge_attempts, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryServiceConfig {
    /// Identity option keys per category.
    pub identity: CategoryIdentityConfig,
    /// How many times a save re-runs the merge after losing an
    /// optimistic-concurrency race. Values below one behave as one.
    pub max_merge_attempts: u32,
}

impl Default for DiscoveryServiceConfig {
    fn default() -> Self {
        Self {
            identity: CategoryIdentityConfig::standard(),
            max_merge_attempts: DEFAULT_MAX_MERGE_ATTEMPTS,
        }
    }
}

impl DiscoveryServiceConfig {
    /// Creates a configuration that surfaces the first concurrency conflict
    /// instead of retrying.
    #[must_use]
    pub fn single_attempt() -> Self {
        Self {
            max_merge_attempts: 1,
            ..Self::default()
        }
    }

    /// Replaces the identity table.
    #[must_use]
    pub fn with_identity(mut self, identity: CategoryIdentityConfig) -> Self {
        self.identity = identity;
        self
    }

    /// Sets the maximum number of merge attempts.
    #[must_use]
    pub const fn with_max_merge_attempts(mut self, attempts: u32) -> Self {
        self.max_merge_attempts = attempts;
        self
    }
}
