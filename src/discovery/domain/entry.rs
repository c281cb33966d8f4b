//! Discovered tool entry value type.

use super::DiscoveryStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single tool discovered for an application.
///
/// `tool_name` and the identity-relevant subset of `options` form the
/// natural key. `description` is creation-only; `status` is the one field a
/// later save may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredEntry {
    tool_name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: DiscoveryStatus,
    #[serde(default)]
    options: BTreeMap<String, String>,
}

impl DiscoveredEntry {
    /// Creates an entry for the named tool with the given status.
    #[must_use]
    pub fn new(tool_name: impl Into<String>, status: DiscoveryStatus) -> Self {
        Self {
            tool_name: tool_name.into(),
            description: String::new(),
            status,
            options: BTreeMap::new(),
        }
    }

    /// Sets the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds or replaces one option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns a copy of this entry carrying `status`.
    #[must_use]
    pub fn with_status(mut self, status: DiscoveryStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the tool name.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> DiscoveryStatus {
        self.status
    }

    /// Returns all options.
    #[must_use]
    pub const fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Returns one option value.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Applies the mutable fields of `incoming` to this entry.
    ///
    /// Only the status changes. Tool name, description and options of the
    /// stored entry are kept.
    pub(crate) const fn absorb(&mut self, incoming: &Self) {
        self.status = incoming.status;
    }
}
