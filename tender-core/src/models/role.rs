use std::{fmt, str::FromStr};
use thiserror::Error;

/// The authenticated role of a caller, resolved against a specific bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Platform operator; overrides every timing and status rule
    Administrator,
    /// The economic operator that submitted the bid
    #[cfg_attr(feature = "serde", serde(rename = "bid_owner"))]
    BidOwner,
    /// The procuring entity that owns the tender
    #[cfg_attr(feature = "serde", serde(rename = "tender_owner"))]
    TenderOwner,
    /// Anybody else
    #[cfg_attr(feature = "serde", serde(rename = "anonymous"))]
    Anonymous,
}

impl Role {
    /// Whether the caller skips the status, window and transition checks on update.
    pub fn bypasses_guard(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Whether the caller may always see the bid in full.
    pub fn owns_bid(&self) -> bool {
        matches!(self, Self::BidOwner)
    }

    /// The role name as it appears in permission tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::BidOwner => "bid_owner",
            Self::TenderOwner => "tender_owner",
            Self::Anonymous => "anonymous",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The provided string does not name a known role
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role `{0}`")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Self::Administrator,
            Self::BidOwner,
            Self::TenderOwner,
            Self::Anonymous,
        ]
        .into_iter()
        .find(|role| role.as_str() == s)
        .ok_or_else(|| ParseRoleError(s.to_owned()))
    }
}
