//! Domain model for auto-discovery records.
//!
//! A discovery record collects the tools found for one application, grouped
//! into nine fixed categories. The domain owns the merge-on-save policy that
//! reconciles a resubmission with the stored record. Infrastructure concerns
//! stay outside this boundary.

mod category;
mod entry;
mod error;
mod identity;
mod ids;
mod merge;
mod metadata;
mod record;
mod status;

pub use category::{DiscoveryCategories, DiscoveryCategory};
pub use entry::DiscoveredEntry;
pub use error::{
    DiscoveryDomainError, IdentityConfigError, ParseDiscoveryCategoryError,
    ParseDiscoveryStatusError,
};
pub use identity::{CategoryIdentityConfig, EntryMatcher, IdentityFields, NaturalKey};
pub use ids::{DiscoveryId, ID_HEX_LENGTH, Revision};
pub use merge::{CategoryMerger, RecordMerger};
pub use metadata::DiscoveryMetadata;
pub use record::{DiscoveryDraft, DiscoveryRecord, PersistedDiscoveryData};
pub use status::DiscoveryStatus;
