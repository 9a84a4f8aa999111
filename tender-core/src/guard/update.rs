use super::stamp_value_changes;
use crate::models::{Bid, BidPatch, BidStatus, Role, StampedPatch, Tender, TenderStatus};
use thiserror::Error;

/// The reasons an update to a bid is refused.
///
/// The messages are part of the public API and are shown to clients verbatim.
#[derive(Debug, Error, PartialEq)]
pub enum UpdateFailure<DateTime> {
    /// The tender is not accepting bid updates
    #[error("Can't update bid in current ({0}) tender status")]
    TenderStatus(TenderStatus),

    /// The update arrived outside the tendering period
    #[error(
        "Bid can be updated only during the tendering period: from ({}) to ({end}).",
        .start.as_ref().map_or_else(|| "None".to_owned(), ToString::to_string)
    )]
    OutsideTenderPeriod {
        /// Start of the period, if bounded
        start: Option<DateTime>,
        /// End of the period
        end: DateTime,
    },

    /// The update would leave the bid in a status other than pending
    #[error("Can't update bid to ({0}) status")]
    BidStatus(BidStatus),
}

impl<DateTime> UpdateFailure<DateTime> {
    /// The part of the request the failure is reported against.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TenderStatus(_) | Self::OutsideTenderPeriod { .. } => "data",
            Self::BidStatus(_) => "bid",
        }
    }
}

/// A patch that passed the guard, ready for the merge step.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedUpdate<DateTime> {
    /// The client patch with change timestamps attached
    pub patch: StampedPatch<DateTime>,
    /// Whether the merge should mark the owning tender as modified
    pub touch_tender: bool,
}

/// The status the bid will have once `patch` is applied.
pub fn effective_status(current: BidStatus, patch: &BidPatch) -> BidStatus {
    patch.status.unwrap_or(current)
}

/// Run the authorization, timing and transition checks, in that order.
///
/// The first failing check wins. Administrators skip all three.
pub fn check_update<DateTime: Ord + Clone>(
    role: Role,
    tender: &Tender<DateTime>,
    bid: &Bid<DateTime>,
    patch: &BidPatch,
    now: &DateTime,
) -> Result<(), UpdateFailure<DateTime>> {
    if role.bypasses_guard() {
        return Ok(());
    }

    if !tender.status.accepts_bid_updates() {
        return Err(UpdateFailure::TenderStatus(tender.status));
    }

    let period = &tender.tender_period;
    if !period.contains(now) {
        return Err(UpdateFailure::OutsideTenderPeriod {
            start: period.start_date.clone(),
            end: period.end_date.clone(),
        });
    }

    match effective_status(bid.status, patch) {
        BidStatus::Pending => Ok(()),
        target => Err(UpdateFailure::BidStatus(target)),
    }
}

/// Guard an update and prepare it for merging.
///
/// Amount changes are stamped regardless of the caller's role. The returned
/// update always asks the merge step to leave the tender's modification
/// marker alone: changing a nested bid is not a change to the tender.
pub fn prepare_update<DateTime: Ord + Clone>(
    role: Role,
    tender: &Tender<DateTime>,
    bid: &Bid<DateTime>,
    patch: &BidPatch,
    now: &DateTime,
) -> Result<PreparedUpdate<DateTime>, UpdateFailure<DateTime>> {
    check_update(role, tender, bid, patch, now)?;

    Ok(PreparedUpdate {
        patch: stamp_value_changes(bid, patch, now),
        touch_tender: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BidId, BidderId, Period, TenderId, Value, ValuePatch};
    use rstest::*;
    use uuid::Uuid;

    #[fixture]
    fn bid() -> Bid<i64> {
        Bid {
            id: BidId(Uuid::from_u128(1)),
            tender_id: TenderId(Uuid::from_u128(2)),
            bidder_id: BidderId(Uuid::from_u128(3)),
            status: BidStatus::Pending,
            value: Some(Value {
                amount: 489.0,
                currency: "UAH".into(),
                value_added_tax_included: true,
            }),
            date: None,
            lot_values: Vec::new(),
        }
    }

    fn tender(status: TenderStatus, start_date: Option<i64>, end_date: i64) -> Tender<i64> {
        Tender {
            id: TenderId(Uuid::from_u128(2)),
            status,
            tender_period: Period {
                start_date,
                end_date,
            },
            date_modified: 0,
            bids: Vec::new(),
        }
    }

    fn amount(amount: f64) -> BidPatch {
        BidPatch {
            value: Some(ValuePatch {
                amount: Some(amount),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn status(status: BidStatus) -> BidPatch {
        BidPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    #[rstest]
    fn wrong_tender_status_is_rejected_regardless_of_patch(
        bid: Bid<i64>,
        #[values(
            BidPatch::default(),
            amount(600.0),
            status(BidStatus::Pending),
            status(BidStatus::Withdrawn)
        )]
        patch: BidPatch,
    ) {
        for tender_status in TenderStatus::ALL {
            if tender_status == TenderStatus::ActiveTendering {
                continue;
            }
            let result = check_update(
                Role::BidOwner,
                &tender(tender_status, Some(0), 100),
                &bid,
                &patch,
                &50,
            );
            assert_eq!(result, Err(UpdateFailure::TenderStatus(tender_status)));
        }
    }

    #[rstest]
    #[case(Some(10), 100, 9, false)]
    #[case(Some(10), 100, 10, true)]
    #[case(Some(10), 100, 100, true)]
    #[case(Some(10), 100, 101, false)]
    #[case(None, 100, i64::MIN, true)]
    #[case(None, 100, 101, false)]
    fn tendering_window(
        bid: Bid<i64>,
        #[case] start: Option<i64>,
        #[case] end: i64,
        #[case] now: i64,
        #[case] allowed: bool,
    ) {
        let result = check_update(
            Role::BidOwner,
            &tender(TenderStatus::ActiveTendering, start, end),
            &bid,
            &amount(600.0),
            &now,
        );
        if allowed {
            assert_eq!(result, Ok(()));
        } else {
            assert_eq!(result, Err(UpdateFailure::OutsideTenderPeriod { start, end }));
        }
    }

    #[rstest]
    fn effective_status_defaults_to_current(bid: Bid<i64>) {
        assert_eq!(effective_status(bid.status, &amount(1.0)), BidStatus::Pending);
        assert_eq!(
            effective_status(BidStatus::Draft, &BidPatch::default()),
            BidStatus::Draft
        );
        assert_eq!(
            effective_status(BidStatus::Draft, &status(BidStatus::Pending)),
            BidStatus::Pending
        );
    }

    #[rstest]
    fn only_pending_is_a_legal_target(bid: Bid<i64>) {
        let open = tender(TenderStatus::ActiveTendering, Some(0), 100);
        for target in BidStatus::ALL {
            let result = check_update(Role::BidOwner, &open, &bid, &status(target), &50);
            if target == BidStatus::Pending {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(result, Err(UpdateFailure::BidStatus(target)));
            }
        }
    }

    #[rstest]
    fn omitted_status_keeps_a_draft_bid_out(mut bid: Bid<i64>) {
        bid.status = BidStatus::Draft;
        let open = tender(TenderStatus::ActiveTendering, Some(0), 100);
        assert_eq!(
            check_update(Role::BidOwner, &open, &bid, &amount(600.0), &50),
            Err(UpdateFailure::BidStatus(BidStatus::Draft))
        );
    }

    #[rstest]
    fn first_failure_wins(bid: Bid<i64>) {
        // wrong status, outside the window, and an illegal transition all at once
        let closed = tender(TenderStatus::Complete, Some(0), 100);
        assert_eq!(
            check_update(Role::BidOwner, &closed, &bid, &status(BidStatus::Withdrawn), &500),
            Err(UpdateFailure::TenderStatus(TenderStatus::Complete))
        );

        let open = tender(TenderStatus::ActiveTendering, Some(0), 100);
        assert!(matches!(
            check_update(Role::BidOwner, &open, &bid, &status(BidStatus::Withdrawn), &500),
            Err(UpdateFailure::OutsideTenderPeriod { .. })
        ));
    }

    #[rstest]
    fn administrators_bypass_but_are_still_stamped(bid: Bid<i64>) {
        for tender_status in TenderStatus::ALL {
            let prepared = prepare_update(
                Role::Administrator,
                &tender(tender_status, Some(0), 100),
                &bid,
                &BidPatch {
                    status: Some(BidStatus::Active),
                    ..amount(600.0)
                },
                &1_000,
            )
            .unwrap();
            assert_eq!(prepared.patch.date, Some(1_000));
            assert!(!prepared.touch_tender);
        }
    }

    #[rstest]
    fn prepared_update_never_touches_the_tender(bid: Bid<i64>) {
        let open = tender(TenderStatus::ActiveTendering, None, 100);
        let prepared = prepare_update(Role::BidOwner, &open, &bid, &amount(489.0), &50).unwrap();
        assert!(!prepared.touch_tender);
        assert_eq!(prepared.patch.date, None);
    }

    #[test]
    fn messages_match_the_published_wording() {
        assert_eq!(
            UpdateFailure::<i64>::TenderStatus(TenderStatus::Complete).to_string(),
            "Can't update bid in current (complete) tender status"
        );
        assert_eq!(
            UpdateFailure::OutsideTenderPeriod {
                start: None,
                end: 100
            }
            .to_string(),
            "Bid can be updated only during the tendering period: from (None) to (100)."
        );
        assert_eq!(
            UpdateFailure::OutsideTenderPeriod {
                start: Some(1),
                end: 100
            }
            .to_string(),
            "Bid can be updated only during the tendering period: from (1) to (100)."
        );
        let transition = UpdateFailure::<i64>::BidStatus(BidStatus::Withdrawn);
        assert_eq!(transition.to_string(), "Can't update bid to (withdrawn) status");
        assert_eq!(transition.name(), "bid");
    }
}
