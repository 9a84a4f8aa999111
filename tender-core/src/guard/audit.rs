use crate::models::{Bid, BidPatch, LotId, StampedPatch};

/// Attach change timestamps to a patch wherever it changes an amount.
///
/// Stamps follow the net effect of the patch: the patch is merged into `bid`
/// and the overall offer is stamped if its amount differs afterwards, as is
/// each lot offer whose amount differs. A value the merge would not create,
/// or lot entries that cancel each other out, are not changes, and neither
/// is resubmitting the stored offer.
///
/// Lot changes naming a lot the bid holds no offer for are carried through
/// unstamped. The input patch is left untouched.
pub fn stamp_value_changes<DateTime: Clone>(
    bid: &Bid<DateTime>,
    patch: &BidPatch,
    now: &DateTime,
) -> StampedPatch<DateTime> {
    let merged = patch.merged(bid);

    let offered = |bid: &Bid<DateTime>| bid.value.as_ref().map(|value| value.amount);
    let date = (offered(&merged) != offered(bid)).then(|| now.clone());

    let stored = bid.lot_amounts();
    let lot_dates = merged
        .lot_values
        .iter()
        .filter(|lot_value| {
            stored
                .get(&lot_value.related_lot)
                .is_some_and(|amount| *amount != lot_value.value.amount)
        })
        .map(|lot_value| (lot_value.related_lot, now.clone()))
        .collect();

    StampedPatch {
        patch: patch.clone(),
        date,
        lot_dates,
        basis: bid.clone(),
    }
}

/// The lots named in `patch` that `bid` holds no offer for.
pub fn unknown_lots<DateTime>(bid: &Bid<DateTime>, patch: &BidPatch) -> Vec<LotId> {
    let stored = bid.lot_amounts();
    patch
        .lot_values
        .iter()
        .flatten()
        .map(|lot_patch| lot_patch.related_lot)
        .filter(|lot| !stored.contains(lot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BidId, BidStatus, BidderId, LotValue, LotValuePatch, TenderId, Value, ValuePatch,
    };
    use uuid::Uuid;

    const NOW: i64 = 1_000;

    fn lot(n: u128) -> LotId {
        LotId(Uuid::from_u128(n))
    }

    fn uah(amount: f64) -> Value {
        Value {
            amount,
            currency: "UAH".into(),
            value_added_tax_included: true,
        }
    }

    fn bid() -> Bid<i64> {
        Bid {
            id: BidId(Uuid::from_u128(1)),
            tender_id: TenderId(Uuid::from_u128(2)),
            bidder_id: BidderId(Uuid::from_u128(3)),
            status: BidStatus::Pending,
            value: Some(uah(489.0)),
            date: Some(1),
            lot_values: vec![
                LotValue {
                    related_lot: lot(10),
                    value: uah(100.0),
                    date: Some(1),
                },
                LotValue {
                    related_lot: lot(11),
                    value: uah(200.0),
                    date: Some(1),
                },
            ],
        }
    }

    fn value(amount: Option<f64>) -> Option<ValuePatch> {
        Some(ValuePatch {
            amount,
            currency: Some("UAH".into()),
            ..Default::default()
        })
    }

    fn lots(entries: &[(u128, Option<f64>)]) -> BidPatch {
        BidPatch {
            lot_values: Some(
                entries
                    .iter()
                    .map(|(n, amount)| LotValuePatch {
                        related_lot: lot(*n),
                        value: value(*amount),
                    })
                    .collect(),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn changed_amount_is_stamped() {
        let patch = BidPatch {
            value: value(Some(600.0)),
            ..Default::default()
        };
        let stamped = stamp_value_changes(&bid(), &patch, &NOW);
        assert_eq!(stamped.date, Some(NOW));
        assert_eq!(stamped.patch, patch);
    }

    #[test]
    fn unchanged_or_absent_amount_is_not_stamped() {
        for amount in [Some(489.0), None] {
            let patch = BidPatch {
                value: value(amount),
                ..Default::default()
            };
            assert_eq!(stamp_value_changes(&bid(), &patch, &NOW).date, None);
        }
        assert_eq!(
            stamp_value_changes(&bid(), &BidPatch::default(), &NOW).date,
            None
        );
    }

    #[test]
    fn first_amount_on_a_bid_without_value_is_stamped() {
        let mut bid = bid();
        bid.value = None;
        let patch = BidPatch {
            value: value(Some(489.0)),
            ..Default::default()
        };
        assert_eq!(stamp_value_changes(&bid, &patch, &NOW).date, Some(NOW));
    }

    #[test]
    fn resubmitting_the_merged_amount_does_not_restamp() {
        let patch = BidPatch {
            value: value(Some(600.0)),
            ..Default::default()
        };
        let first = stamp_value_changes(&bid(), &patch, &NOW);
        let merged = first.apply(&bid()).unwrap();
        let second = stamp_value_changes(&merged, &patch, &(NOW + 1));
        assert_eq!(second.date, None);
        assert_eq!(second.apply(&merged), None);
    }

    #[test]
    fn only_changed_known_lots_are_stamped() {
        let patch = lots(&[(10, Some(150.0)), (11, Some(200.0)), (12, Some(5.0)), (10, None)]);
        let stamped = stamp_value_changes(&bid(), &patch, &NOW);
        assert_eq!(stamped.lot_dates.len(), 1);
        assert_eq!(stamped.lot_dates.get(&lot(10)), Some(&NOW));
        assert_eq!(stamped.date, None);
        assert_eq!(unknown_lots(&bid(), &patch), vec![lot(12)]);
    }

    #[test]
    fn lot_without_amount_is_not_stamped() {
        let patch = lots(&[(11, None)]);
        assert!(stamp_value_changes(&bid(), &patch, &NOW).lot_dates.is_empty());
    }

    #[test]
    fn incomplete_first_value_is_not_stamped() {
        let mut bid = bid();
        bid.value = None;
        let patch = BidPatch {
            value: Some(ValuePatch {
                amount: Some(600.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let stamped = stamp_value_changes(&bid, &patch, &NOW);
        assert_eq!(stamped.date, None);
        assert_eq!(stamped.apply(&bid), None);
    }

    #[test]
    fn lot_entries_that_cancel_out_are_not_stamped() {
        let patch = lots(&[(10, Some(150.0)), (10, Some(100.0))]);
        let stamped = stamp_value_changes(&bid(), &patch, &NOW);
        assert!(stamped.lot_dates.is_empty());
        assert_eq!(stamped.apply(&bid()), None);
    }

    #[test]
    fn stamps_carry_the_bid_they_were_computed_against() {
        let patch = BidPatch {
            value: value(Some(600.0)),
            ..Default::default()
        };
        assert_eq!(stamp_value_changes(&bid(), &patch, &NOW).basis, bid());
    }
}
