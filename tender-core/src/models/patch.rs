use super::{Bid, BidStatus, LotId, LotMap, LotValue, Value};

/// A partial update to a bid, as submitted by a client.
///
/// Absent fields are left untouched. Clients cannot set change timestamps;
/// those are attached by the guard (see [`StampedPatch`]).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct BidPatch {
    /// The requested status of the bid
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub status: Option<BidStatus>,
    /// Changes to the overall offer
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<ValuePatch>,
    /// Changes to individual lot offers, matched by `relatedLot`
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub lot_values: Option<Vec<LotValuePatch>>,
}

/// A partial update to a [`Value`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct ValuePatch {
    /// The new amount
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub amount: Option<f64>,
    /// The new currency
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub currency: Option<String>,
    /// The new tax-inclusion flag
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value_added_tax_included: Option<bool>,
}

/// A partial update to one lot offer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", deny_unknown_fields)
)]
pub struct LotValuePatch {
    /// The lot whose offer is being changed
    pub related_lot: LotId,
    /// Changes to the lot offer
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub value: Option<ValuePatch>,
}

/// A client patch together with the change timestamps the guard attached to it.
///
/// This is what the merge step consumes. `date` replaces the bid's own change
/// timestamp and `lot_dates` replaces the timestamp of each listed lot offer.
/// `basis` is the bid the stamps were computed against; the merge refuses to
/// apply them to any other version of it.
#[derive(Debug, Clone, PartialEq)]
pub struct StampedPatch<DateTime> {
    /// The client's requested changes
    pub patch: BidPatch,
    /// New change timestamp for the overall offer
    pub date: Option<DateTime>,
    /// New change timestamps for lot offers
    pub lot_dates: LotMap<DateTime>,
    /// The bid as it was when the patch was guarded and stamped
    pub basis: Bid<DateTime>,
}

/// The result of merging a [`StampedPatch`] into the stored bid.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome<DateTime> {
    /// The bid changed; this is the updated bid
    Applied(Bid<DateTime>),
    /// The patch left the bid as it was
    Unchanged,
    /// The stored bid is missing or differs from the patch's basis
    Stale,
}

impl ValuePatch {
    fn merge_into(&self, value: &mut Value) {
        if let Some(amount) = self.amount {
            value.amount = amount;
        }
        if let Some(currency) = &self.currency {
            value.currency = currency.clone();
        }
        if let Some(included) = self.value_added_tax_included {
            value.value_added_tax_included = included;
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value {
            amount: self.amount?,
            currency: self.currency.clone()?,
            value_added_tax_included: self.value_added_tax_included.unwrap_or(true),
        })
    }
}

impl BidPatch {
    /// The bid that results from applying these changes to `bid`, timestamps aside.
    ///
    /// Lot changes naming a lot the bid has no offer for are ignored, as is an
    /// overall value change on a bid without a value unless it names both an
    /// amount and a currency. Entries naming the same lot apply in order.
    pub fn merged<DateTime: Clone>(&self, bid: &Bid<DateTime>) -> Bid<DateTime> {
        let mut next = bid.clone();

        if let Some(status) = self.status {
            next.status = status;
        }

        if let Some(value_patch) = &self.value {
            match next.value.as_mut() {
                Some(value) => value_patch.merge_into(value),
                None => next.value = value_patch.to_value(),
            }
        }

        for lot_patch in self.lot_values.iter().flatten() {
            let Some(LotValue { value, .. }) = next
                .lot_values
                .iter_mut()
                .find(|lot_value| lot_value.related_lot == lot_patch.related_lot)
            else {
                continue;
            };
            if let Some(value_patch) = &lot_patch.value {
                value_patch.merge_into(value);
            }
        }

        next
    }
}

impl<DateTime: Clone + PartialEq> StampedPatch<DateTime> {
    /// Merge the changes and timestamps into a copy of `bid`.
    ///
    /// Returns `None` if the merge produces a bid identical to the input.
    pub fn apply(&self, bid: &Bid<DateTime>) -> Option<Bid<DateTime>> {
        let mut next = self.patch.merged(bid);

        if let Some(date) = &self.date {
            next.date = Some(date.clone());
        }
        for lot_value in next.lot_values.iter_mut() {
            if let Some(stamp) = self.lot_dates.get(&lot_value.related_lot) {
                lot_value.date = Some(stamp.clone());
            }
        }

        (&next != bid).then_some(next)
    }

    /// Merge into `stored`, provided it is still the bid the patch was stamped against.
    pub fn merge_onto(&self, stored: Option<&Bid<DateTime>>) -> MergeOutcome<DateTime> {
        match stored {
            Some(bid) if *bid == self.basis => match self.apply(bid) {
                Some(next) => MergeOutcome::Applied(next),
                None => MergeOutcome::Unchanged,
            },
            _ => MergeOutcome::Stale,
        }
    }
}
