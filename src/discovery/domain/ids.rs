//! Identifier type for discovery records.

use super::DiscoveryDomainError;
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of raw bytes in a discovery identifier.
const ID_BYTES: usize = 12;

/// Number of hexadecimal characters in the textual identifier form.
pub const ID_HEX_LENGTH: usize = ID_BYTES * 2;

/// Store-assigned identifier for a discovery record.
///
/// The textual form is 24 hexadecimal characters. New identifiers start with
/// a big-endian seconds timestamp so they sort roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiscoveryId([u8; ID_BYTES]);

impl DiscoveryId {
    /// Generates a fresh identifier stamped with the current clock time.
    #[must_use]
    #[expect(
        clippy::big_endian_bytes,
        reason = "identifier layout places a big-endian timestamp first"
    )]
    pub fn generate(clock: &impl Clock) -> Self {
        let seconds = u32::try_from(clock.utc().timestamp()).unwrap_or(u32::MAX);
        let random = Uuid::new_v4().into_bytes();
        let mut bytes = [0_u8; ID_BYTES];
        for (slot, byte) in bytes
            .iter_mut()
            .zip(seconds.to_be_bytes().into_iter().chain(random))
        {
            *slot = byte;
        }
        Self(bytes)
    }

    /// Parses the 24-character hexadecimal form.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryDomainError::InvalidIdentifier`] carrying the raw
    /// input when it is not exactly 24 hexadecimal characters.
    pub fn parse(value: &str) -> Result<Self, DiscoveryDomainError> {
        let mut bytes = [0_u8; ID_BYTES];
        hex::decode_to_slice(value, &mut bytes)
            .map_err(|_| DiscoveryDomainError::InvalidIdentifier(value.to_owned()))?;
        Ok(Self(bytes))
    }

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw identifier bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; ID_BYTES] {
        self.0
    }

    /// Returns the lowercase hexadecimal form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for DiscoveryId {
    type Err = DiscoveryDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for DiscoveryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for DiscoveryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DiscoveryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Optimistic-concurrency counter for a persisted discovery record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    /// Revision assigned to a newly created record.
    pub const INITIAL: Self = Self(1);

    /// Creates a revision from a stored counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the revision that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the underlying counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
