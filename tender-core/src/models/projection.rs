use super::{Bid, BidId, BidStatus, BidderId, LotId, TenderStatus, Value};

/// Selects how much of a bid is revealed to a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Every field. Used for the bid's owner and for the response to an update.
    View,
    /// Fields depend on the lifecycle status of the tender.
    Status(TenderStatus),
}

/// A bid with the fields its audience may not see removed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BidView<DateTime> {
    /// Unique identifier of the bid
    pub id: BidId,
    /// Current status of the bid
    pub status: BidStatus,
    /// The economic operator that owns the bid
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub bidder_id: Option<BidderId>,
    /// The overall offer
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<Value>,
    /// When the overall offer last changed
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<DateTime>,
    /// Per-lot offers
    #[cfg_attr(
        feature = "serde",
        serde(default = "Vec::<LotValueView<DateTime>>::new", skip_serializing_if = "Vec::is_empty")
    )]
    pub lot_values: Vec<LotValueView<DateTime>>,
}

/// A lot offer with the fields its audience may not see removed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LotValueView<DateTime> {
    /// The lot this offer applies to
    pub related_lot: LotId,
    /// The offer itself
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<Value>,
    /// When the lot offer last changed
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<DateTime>,
}

/// What a projection exposes, from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Exposure {
    Identity,
    Lots,
    Offers,
    Everything,
}

impl Projection {
    fn exposure(&self) -> Exposure {
        match self {
            Self::View => Exposure::Everything,
            Self::Status(status) => match status {
                TenderStatus::Draft
                | TenderStatus::ActiveEnquiries
                | TenderStatus::ActiveTendering
                | TenderStatus::ActivePreQualification
                | TenderStatus::ActivePreQualificationStandStill => Exposure::Identity,
                TenderStatus::ActiveAuction => Exposure::Lots,
                TenderStatus::ActiveQualification
                | TenderStatus::ActiveAwarded
                | TenderStatus::Complete
                | TenderStatus::Unsuccessful
                | TenderStatus::Cancelled => Exposure::Offers,
            },
        }
    }

    /// Serialize `bid` for this audience.
    pub fn project<DateTime: Clone>(&self, bid: &Bid<DateTime>) -> BidView<DateTime> {
        let exposure = self.exposure();
        let offers = exposure >= Exposure::Offers;

        let lot_values = if exposure >= Exposure::Lots {
            bid.lot_values
                .iter()
                .map(|lot_value| LotValueView {
                    related_lot: lot_value.related_lot,
                    value: offers.then(|| lot_value.value.clone()),
                    date: offers.then(|| lot_value.date.clone()).flatten(),
                })
                .collect()
        } else {
            Vec::new()
        };

        BidView {
            id: bid.id,
            status: bid.status,
            bidder_id: (exposure == Exposure::Everything).then_some(bid.bidder_id),
            value: offers.then(|| bid.value.clone()).flatten(),
            date: offers.then(|| bid.date.clone()).flatten(),
            lot_values,
        }
    }
}
