use tender_core::models::{
    Bid, BidId, BidStatus, BidderId, LotId, LotValue, Period, Tender, TenderId, TenderStatus, Value,
};
use tender_sqlite::types::DateTime;
use time::OffsetDateTime;

// Whole seconds keep stored and expected timestamps comparable.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(OffsetDateTime::now_utc().unix_timestamp()).unwrap()
}

pub fn uah(amount: f64) -> Value {
    Value {
        amount,
        currency: "UAH".into(),
        value_added_tax_included: true,
    }
}

pub fn bid(tender_id: TenderId, lots: &[LotId]) -> Bid<DateTime> {
    Bid {
        id: BidId(uuid::Uuid::new_v4()),
        tender_id,
        bidder_id: BidderId(uuid::Uuid::new_v4()),
        status: BidStatus::Pending,
        value: lots.is_empty().then(|| uah(489.0)),
        date: None,
        lot_values: lots
            .iter()
            .map(|lot| LotValue {
                related_lot: *lot,
                value: uah(100.0),
                date: None,
            })
            .collect(),
    }
}

pub fn tender(now: OffsetDateTime, bids: usize) -> Tender<DateTime> {
    let id = TenderId(uuid::Uuid::new_v4());
    Tender {
        id,
        status: TenderStatus::ActiveTendering,
        tender_period: Period {
            start_date: Some((now - time::Duration::days(1)).into()),
            end_date: (now + time::Duration::days(1)).into(),
        },
        date_modified: now.into(),
        bids: (0..bids).map(|_| bid(id, &[])).collect(),
    }
}
