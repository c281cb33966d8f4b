//! Natural-key identity rules for discovered entries.
//!
//! Each category declares which option keys identify an entry. Two entries
//! of the same category describe the same tool when their tool names are
//! equal and the declared option values are equal; status and description
//! never take part in the comparison.

use super::{DiscoveredEntry, DiscoveryCategory, IdentityConfigError};
use std::collections::{BTreeMap, HashSet};

/// Validated list of identity option keys for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityFields(Vec<String>);

impl IdentityFields {
    /// Creates a validated key list for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityConfigError::EmptyOptionKey`] when a key is blank or
    /// [`IdentityConfigError::DuplicateOptionKey`] when a key repeats.
    pub fn new(
        category: DiscoveryCategory,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, IdentityConfigError> {
        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for raw in keys {
            let key = raw.into().trim().to_owned();
            if key.is_empty() {
                return Err(IdentityConfigError::EmptyOptionKey(
                    category.as_str().to_owned(),
                ));
            }
            if !seen.insert(key.clone()) {
                return Err(IdentityConfigError::DuplicateOptionKey {
                    category: category.as_str().to_owned(),
                    key,
                });
            }
            validated.push(key);
        }
        Ok(Self(validated))
    }

    fn from_static(keys: &[&str]) -> Self {
        Self(keys.iter().map(|key| (*key).to_owned()).collect())
    }

    /// Returns the option keys.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.0
    }
}

/// Identity option keys for every category, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIdentityConfig {
    fields: BTreeMap<DiscoveryCategory, IdentityFields>,
}

impl Default for CategoryIdentityConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryIdentityConfig {
    /// Returns the built-in identity table.
    #[must_use]
    pub fn standard() -> Self {
        let fields = DiscoveryCategory::ALL
            .into_iter()
            .map(|category| (category, IdentityFields::from_static(standard_keys(category))))
            .collect();
        Self { fields }
    }

    /// Replaces the identity keys of one category.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityConfigError`] when the key list is malformed.
    pub fn with_fields(
        mut self,
        category: DiscoveryCategory,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, IdentityConfigError> {
        self.fields
            .insert(category, IdentityFields::new(category, keys)?);
        Ok(self)
    }

    /// Builds a table from a JSON object mapping category names to key
    /// lists, e.g. `{"codeRepo": ["url", "branch"]}`.
    ///
    /// Categories missing from the document keep their built-in keys.
    /// Category names match case-insensitively, so `codeRepo` and
    /// `CodeRepo` in one document are rejected as a duplicate.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityConfigError`] when the document cannot be decoded,
    /// names an unknown category, names a category twice, or carries a
    /// malformed key list.
    pub fn from_json(document: &str) -> Result<Self, IdentityConfigError> {
        let overrides: BTreeMap<String, Vec<String>> = serde_json::from_str(document)
            .map_err(|err| IdentityConfigError::InvalidDocument(err.to_string()))?;
        let mut configured = HashSet::with_capacity(overrides.len());
        overrides
            .into_iter()
            .try_fold(Self::standard(), |config, (name, keys)| {
                let category = DiscoveryCategory::try_from(name.as_str())?;
                if !configured.insert(category) {
                    return Err(IdentityConfigError::DuplicateCategory(
                        category.as_str().to_owned(),
                    ));
                }
                config.with_fields(category, keys)
            })
    }

    /// Returns the identity option keys for `category`.
    #[must_use]
    pub fn keys(&self, category: DiscoveryCategory) -> &[String] {
        self.fields
            .get(&category)
            .map(IdentityFields::keys)
            .unwrap_or_default()
    }

    /// Returns the matcher for `category`.
    #[must_use]
    pub fn matcher(&self, category: DiscoveryCategory) -> EntryMatcher<'_> {
        EntryMatcher {
            keys: self.keys(category),
        }
    }
}

const fn standard_keys(category: DiscoveryCategory) -> &'static [&'static str] {
    match category {
        DiscoveryCategory::CodeRepo => &["url", "branch"],
        DiscoveryCategory::Build => &["jobName", "jobUrl", "instanceUrl"],
        DiscoveryCategory::SecurityScan
        | DiscoveryCategory::LibraryScan
        | DiscoveryCategory::StaticCode => &["projectName", "instanceUrl"],
        DiscoveryCategory::Deployment => &["applicationName", "environment", "instanceUrl"],
        DiscoveryCategory::FunctionalTest => &["jobName", "instanceUrl"],
        DiscoveryCategory::Artifact => &["path", "artifactName", "instanceUrl"],
        DiscoveryCategory::Feature => &["projectName", "teamName", "instanceUrl"],
    }
}

/// Identity of an entry within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalKey {
    tool_name: String,
    identity: Vec<Option<String>>,
}

impl NaturalKey {
    /// Returns the tool name part of the key.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }
}

/// Compares entries of one category by natural key.
#[derive(Debug, Clone, Copy)]
pub struct EntryMatcher<'a> {
    keys: &'a [String],
}

impl EntryMatcher<'_> {
    /// Projects `entry` onto its natural key.
    ///
    /// An identity option missing from the entry projects to `None`.
    #[must_use]
    pub fn natural_key(&self, entry: &DiscoveredEntry) -> NaturalKey {
        NaturalKey {
            tool_name: entry.tool_name().to_owned(),
            identity: self
                .keys
                .iter()
                .map(|key| entry.option(key).map(str::to_owned))
                .collect(),
        }
    }

    /// Returns `true` when both entries describe the same tool.
    #[must_use]
    pub fn matches(&self, a: &DiscoveredEntry, b: &DiscoveredEntry) -> bool {
        a.tool_name() == b.tool_name()
            && self.keys.iter().all(|key| a.option(key) == b.option(key))
    }
}
