//! Review status of a discovered entry.

use super::ParseDiscoveryStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing review status of a discovered tool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscoveryStatus {
    /// The entry was discovered and awaits a decision from the user.
    #[default]
    AwaitingUserResponse,
    /// The user rejected the entry.
    UserRejected,
    /// The user approved the entry.
    UserApproved,
    /// The entry has been confirmed and wired into the dashboard.
    Confirmed,
}

impl DiscoveryStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingUserResponse => "AWAITING_USER_RESPONSE",
            Self::UserRejected => "USER_REJECTED",
            Self::UserApproved => "USER_APPROVED",
            Self::Confirmed => "CONFIRMED",
        }
    }
}

impl fmt::Display for DiscoveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DiscoveryStatus {
    type Error = ParseDiscoveryStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "AWAITING_USER_RESPONSE" => Ok(Self::AwaitingUserResponse),
            "USER_REJECTED" => Ok(Self::UserRejected),
            "USER_APPROVED" => Ok(Self::UserApproved),
            "CONFIRMED" => Ok(Self::Confirmed),
            _ => Err(ParseDiscoveryStatusError(value.to_owned())),
        }
    }
}
