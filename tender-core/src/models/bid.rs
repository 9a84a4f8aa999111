use super::{BidId, BidStatus, BidderId, LotId, LotMap, TenderId, Value};

/// A bid submitted against a tender.
///
/// A bid never owns its tender; `tender_id` is a back-reference only.
/// Tenders with lots carry their offer in `lot_values`, single-lot tenders in `value`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Bid<DateTime> {
    /// Unique identifier of the bid
    pub id: BidId,
    /// The tender this bid was submitted to
    pub tender_id: TenderId,
    /// The economic operator that owns the bid
    pub bidder_id: BidderId,
    /// Current status of the bid
    pub status: BidStatus,
    /// The overall offer, absent for bids on lots
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<Value>,
    /// When `value.amount` last changed
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<DateTime>,
    /// Per-lot offers
    #[cfg_attr(
        feature = "serde",
        serde(default = "Vec::<LotValue<DateTime>>::new", skip_serializing_if = "Vec::is_empty")
    )]
    pub lot_values: Vec<LotValue<DateTime>>,
}

/// An offer on one lot of a tender.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LotValue<DateTime> {
    /// The lot this offer applies to
    pub related_lot: LotId,
    /// The offer itself
    pub value: Value,
    /// When `value.amount` last changed
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<DateTime>,
}

impl<DateTime> Bid<DateTime> {
    /// The stored amount for each lot, keyed by lot.
    pub fn lot_amounts(&self) -> LotMap<f64> {
        self.lot_values
            .iter()
            .map(|lot_value| (lot_value.related_lot, lot_value.value.amount))
            .collect()
    }
}
