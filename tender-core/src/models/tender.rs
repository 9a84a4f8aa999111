use super::{Bid, Period, TenderId, TenderStatus};

/// The parts of a tender the bid resource needs to see.
///
/// The tender owns its bids. Everything else about a tender (items, lots,
/// documents, the procuring entity) belongs to other resources.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Tender<DateTime> {
    /// Unique identifier of the tender
    pub id: TenderId,
    /// Lifecycle state
    pub status: TenderStatus,
    /// Window in which bids may be submitted and revised
    pub tender_period: Period<DateTime>,
    /// When the tender itself was last considered modified
    pub date_modified: DateTime,
    /// Submitted bids, in submission order
    #[cfg_attr(feature = "serde", serde(default = "Vec::<Bid<DateTime>>::new"))]
    pub bids: Vec<Bid<DateTime>>,
}

impl<DateTime> Tender<DateTime> {
    /// Find one of this tender's bids.
    pub fn bid(&self, bid_id: super::BidId) -> Option<&Bid<DateTime>> {
        self.bids.iter().find(|bid| bid.id == bid_id)
    }
}
