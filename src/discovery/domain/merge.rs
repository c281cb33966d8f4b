//! Merge-on-save policy for discovery records.
//!
//! All field mutability rules live here:
//!
//! - record metadata is write-once;
//! - category lists are merged by natural key, never replaced;
//! - a matched entry takes the incoming status and keeps everything else.
//!
//! Merging is pure. Inputs are borrowed snapshots and the result is a new
//! aggregate.

use super::{
    CategoryIdentityConfig, DiscoveredEntry, DiscoveryCategory, DiscoveryDraft, DiscoveryRecord,
    EntryMatcher, NaturalKey,
};
use mockable::Clock;
use std::collections::{HashMap, HashSet};

/// Merges entry lists of a single category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryMerger<'a> {
    matcher: EntryMatcher<'a>,
}

impl<'a> CategoryMerger<'a> {
    /// Creates a merger that matches entries with `matcher`.
    #[must_use]
    pub const fn new(matcher: EntryMatcher<'a>) -> Self {
        Self { matcher }
    }

    /// Merges `incoming` into `existing`.
    ///
    /// Matched entries take the incoming status. Unmatched incoming entries
    /// are appended in input order. Existing entries without a counterpart
    /// are kept. Repeated natural keys in `incoming` are applied left to
    /// right, so the last status wins and only one entry is kept.
    #[must_use]
    pub fn merge(
        &self,
        existing: &[DiscoveredEntry],
        incoming: &[DiscoveredEntry],
    ) -> Vec<DiscoveredEntry> {
        let mut merged = existing.to_vec();
        let mut index: HashMap<NaturalKey, usize> = HashMap::with_capacity(merged.len());
        for (position, entry) in merged.iter().enumerate() {
            index
                .entry(self.matcher.natural_key(entry))
                .or_insert(position);
        }

        for entry in incoming {
            let key = self.matcher.natural_key(entry);
            if let Some(target) = index
                .get(&key)
                .and_then(|&position| merged.get_mut(position))
            {
                target.absorb(entry);
            } else {
                index.insert(key, merged.len());
                merged.push(entry.clone());
            }
        }
        merged
    }

    /// Removes natural-key duplicates, keeping the first occurrence.
    #[must_use]
    pub fn dedupe(&self, incoming: &[DiscoveredEntry]) -> Vec<DiscoveredEntry> {
        let mut seen = HashSet::with_capacity(incoming.len());
        incoming
            .iter()
            .filter(|entry| seen.insert(self.matcher.natural_key(entry)))
            .cloned()
            .collect()
    }
}

/// Builds and merges whole discovery records.
#[derive(Debug, Clone, Copy)]
pub struct RecordMerger<'a> {
    identity: &'a CategoryIdentityConfig,
}

impl<'a> RecordMerger<'a> {
    /// Creates a merger using the given identity table.
    #[must_use]
    pub const fn new(identity: &'a CategoryIdentityConfig) -> Self {
        Self { identity }
    }

    /// Returns the category merger for one category.
    #[must_use]
    pub fn category(&self, category: DiscoveryCategory) -> CategoryMerger<'a> {
        CategoryMerger::new(self.identity.matcher(category))
    }

    /// Builds a brand-new record from a draft.
    ///
    /// Metadata is copied verbatim and every category list is deduplicated
    /// by natural key.
    #[must_use]
    pub fn create(&self, draft: DiscoveryDraft, clock: &impl Clock) -> DiscoveryRecord {
        let categories = draft
            .categories
            .map_each(|category, entries| self.category(category).dedupe(entries));
        DiscoveryRecord::new(draft.metadata, categories, clock)
    }

    /// Merges an incoming draft into an existing record.
    ///
    /// The draft's metadata is ignored. Each category is merged
    /// independently, the revision advances by one and the modification
    /// time is taken from `clock`.
    #[must_use]
    pub fn merge(
        &self,
        existing: &DiscoveryRecord,
        incoming: &DiscoveryDraft,
        clock: &impl Clock,
    ) -> DiscoveryRecord {
        let categories = existing
            .categories()
            .map_each(|category, stored| {
                self.category(category)
                    .merge(stored, incoming.categories.get(category))
            });
        existing.succeed(categories, clock)
    }
}
