use std::{fmt, str::FromStr};
use thiserror::Error;

/// Lifecycle state of a tender.
///
/// Only `active.tendering` carries meaning for the bid rules: it is both the
/// window in which bidders may revise their offers and the window in which
/// offers are hidden from everybody but their owner. The remaining states are
/// carried opaquely, except for deciding how much of a bid to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TenderStatus {
    /// Not yet published
    #[cfg_attr(feature = "serde", serde(rename = "draft"))]
    Draft,
    /// Published, clarification questions may be asked
    #[cfg_attr(feature = "serde", serde(rename = "active.enquiries"))]
    ActiveEnquiries,
    /// Accepting and revising bids
    #[cfg_attr(feature = "serde", serde(rename = "active.tendering"))]
    ActiveTendering,
    /// Bids are being pre-qualified
    #[cfg_attr(feature = "serde", serde(rename = "active.pre-qualification"))]
    ActivePreQualification,
    /// Pre-qualification decisions may be complained about
    #[cfg_attr(feature = "serde", serde(rename = "active.pre-qualification.stand-still"))]
    ActivePreQualificationStandStill,
    /// The auction is running
    #[cfg_attr(feature = "serde", serde(rename = "active.auction"))]
    ActiveAuction,
    /// Awards are being decided
    #[cfg_attr(feature = "serde", serde(rename = "active.qualification"))]
    ActiveQualification,
    /// An award has been made
    #[cfg_attr(feature = "serde", serde(rename = "active.awarded"))]
    ActiveAwarded,
    /// The tender completed
    #[cfg_attr(feature = "serde", serde(rename = "complete"))]
    Complete,
    /// The tender failed
    #[cfg_attr(feature = "serde", serde(rename = "unsuccessful"))]
    Unsuccessful,
    /// The tender was cancelled
    #[cfg_attr(feature = "serde", serde(rename = "cancelled"))]
    Cancelled,
}

impl TenderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 11] = [
        Self::Draft,
        Self::ActiveEnquiries,
        Self::ActiveTendering,
        Self::ActivePreQualification,
        Self::ActivePreQualificationStandStill,
        Self::ActiveAuction,
        Self::ActiveQualification,
        Self::ActiveAwarded,
        Self::Complete,
        Self::Unsuccessful,
        Self::Cancelled,
    ];

    /// The canonical dotted name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::ActiveEnquiries => "active.enquiries",
            Self::ActiveTendering => "active.tendering",
            Self::ActivePreQualification => "active.pre-qualification",
            Self::ActivePreQualificationStandStill => "active.pre-qualification.stand-still",
            Self::ActiveAuction => "active.auction",
            Self::ActiveQualification => "active.qualification",
            Self::ActiveAwarded => "active.awarded",
            Self::Complete => "complete",
            Self::Unsuccessful => "unsuccessful",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether bidders may revise their bids in this status.
    pub fn accepts_bid_updates(&self) -> bool {
        matches!(self, Self::ActiveTendering)
    }

    /// Whether submitted bids are hidden from everyone but their owner.
    pub fn conceals_bids(&self) -> bool {
        matches!(self, Self::ActiveTendering)
    }
}

/// Status of a single bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BidStatus {
    /// Saved but not yet submitted
    #[cfg_attr(feature = "serde", serde(rename = "draft"))]
    Draft,
    /// Submitted and awaiting the end of tendering
    #[cfg_attr(feature = "serde", serde(rename = "pending"))]
    Pending,
    /// Admitted to the auction
    #[cfg_attr(feature = "serde", serde(rename = "active"))]
    Active,
    /// Rejected during qualification
    #[cfg_attr(feature = "serde", serde(rename = "unsuccessful"))]
    Unsuccessful,
    /// Withdrawn by the bidder
    #[cfg_attr(feature = "serde", serde(rename = "withdrawn"))]
    Withdrawn,
    /// Deleted by the bidder
    #[cfg_attr(feature = "serde", serde(rename = "deleted"))]
    Deleted,
    /// Invalidated by a change to the tender
    #[cfg_attr(feature = "serde", serde(rename = "invalid"))]
    Invalid,
    /// Invalidated while the tender was being pre-qualified
    #[cfg_attr(feature = "serde", serde(rename = "invalid.pre-qualification"))]
    InvalidPreQualification,
}

impl BidStatus {
    /// Every status.
    pub const ALL: [Self; 8] = [
        Self::Draft,
        Self::Pending,
        Self::Active,
        Self::Unsuccessful,
        Self::Withdrawn,
        Self::Deleted,
        Self::Invalid,
        Self::InvalidPreQualification,
    ];

    /// The canonical dotted name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Unsuccessful => "unsuccessful",
            Self::Withdrawn => "withdrawn",
            Self::Deleted => "deleted",
            Self::Invalid => "invalid",
            Self::InvalidPreQualification => "invalid.pre-qualification",
        }
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The provided string does not name a known status
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status `{0}`")]
pub struct ParseStatusError(pub String);

impl FromStr for TenderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_owned()))
    }
}

impl FromStr for BidStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_owned()))
    }
}
