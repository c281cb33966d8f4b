//! The nine fixed categories of discovered entries.

use super::{DiscoveredEntry, ParseDiscoveryCategoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a discovered tool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoveryCategory {
    /// Source code repositories.
    CodeRepo,
    /// Build jobs.
    Build,
    /// Security scanners.
    SecurityScan,
    /// Deployment tooling.
    Deployment,
    /// Third-party library scanners.
    LibraryScan,
    /// Functional test suites.
    FunctionalTest,
    /// Artifact repositories.
    Artifact,
    /// Static code analysis.
    StaticCode,
    /// Feature and work-item trackers.
    Feature,
}

impl DiscoveryCategory {
    /// Every category in canonical order.
    pub const ALL: [Self; 9] = [
        Self::CodeRepo,
        Self::Build,
        Self::SecurityScan,
        Self::Deployment,
        Self::LibraryScan,
        Self::FunctionalTest,
        Self::Artifact,
        Self::StaticCode,
        Self::Feature,
    ];

    /// Returns the canonical camelCase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodeRepo => "codeRepo",
            Self::Build => "build",
            Self::SecurityScan => "securityScan",
            Self::Deployment => "deployment",
            Self::LibraryScan => "libraryScan",
            Self::FunctionalTest => "functionalTest",
            Self::Artifact => "artifact",
            Self::StaticCode => "staticCode",
            Self::Feature => "feature",
        }
    }
}

impl fmt::Display for DiscoveryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DiscoveryCategory {
    type Error = ParseDiscoveryCategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDiscoveryCategoryError(value.to_owned()))
    }
}

/// Entry lists for all nine categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryCategories {
    code_repo: Vec<DiscoveredEntry>,
    build: Vec<DiscoveredEntry>,
    security_scan: Vec<DiscoveredEntry>,
    deployment: Vec<DiscoveredEntry>,
    library_scan: Vec<DiscoveredEntry>,
    functional_test: Vec<DiscoveredEntry>,
    artifact: Vec<DiscoveredEntry>,
    static_code: Vec<DiscoveredEntry>,
    feature: Vec<DiscoveredEntry>,
}

impl DiscoveryCategories {
    /// Creates an empty set of category lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entries of one category.
    #[must_use]
    pub fn with(
        mut self,
        category: DiscoveryCategory,
        entries: impl IntoIterator<Item = DiscoveredEntry>,
    ) -> Self {
        *self.slot_mut(category) = entries.into_iter().collect();
        self
    }

    /// Returns the entries of one category.
    #[must_use]
    pub fn get(&self, category: DiscoveryCategory) -> &[DiscoveredEntry] {
        match category {
            DiscoveryCategory::CodeRepo => &self.code_repo,
            DiscoveryCategory::Build => &self.build,
            DiscoveryCategory::SecurityScan => &self.security_scan,
            DiscoveryCategory::Deployment => &self.deployment,
            DiscoveryCategory::LibraryScan => &self.library_scan,
            DiscoveryCategory::FunctionalTest => &self.functional_test,
            DiscoveryCategory::Artifact => &self.artifact,
            DiscoveryCategory::StaticCode => &self.static_code,
            DiscoveryCategory::Feature => &self.feature,
        }
    }

    /// Returns the total number of entries across all categories.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        DiscoveryCategory::ALL
            .into_iter()
            .map(|category| self.get(category).len())
            .sum()
    }

    /// Returns `true` when no category holds an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }

    /// Builds a new set by applying `f` to every category.
    #[must_use]
    pub fn map_each<F>(&self, mut f: F) -> Self
    where
        F: FnMut(DiscoveryCategory, &[DiscoveredEntry]) -> Vec<DiscoveredEntry>,
    {
        DiscoveryCategory::ALL
            .into_iter()
            .fold(Self::default(), |mapped, category| {
                mapped.with(category, f(category, self.get(category)))
            })
    }

    const fn slot_mut(&mut self, category: DiscoveryCategory) -> &mut Vec<DiscoveredEntry> {
        match category {
            DiscoveryCategory::CodeRepo => &mut self.code_repo,
            DiscoveryCategory::Build => &mut self.build,
            DiscoveryCategory::SecurityScan => &mut self.security_scan,
            DiscoveryCategory::Deployment => &mut self.deployment,
            DiscoveryCategory::LibraryScan => &mut self.library_scan,
            DiscoveryCategory::FunctionalTest => &mut self.functional_test,
            DiscoveryCategory::Artifact => &mut self.artifact,
            DiscoveryCategory::StaticCode => &mut self.static_code,
            DiscoveryCategory::Feature => &mut self.feature,
        }
    }
}
