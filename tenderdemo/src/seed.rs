//! Loading fixture tenders at start-up.

use std::io::Read;
use tender_core::{models::Tender, ports::TenderRepository as _};
use tender_sqlite::{Db, types::DateTime};

/// Store every tender of a JSON array, bids included, returning how many were stored.
pub async fn seed_tenders(db: &Db, reader: impl Read) -> anyhow::Result<usize> {
    let tenders: Vec<Tender<DateTime>> = serde_json::from_reader(reader)?;
    let count = tenders.len();
    for tender in tenders {
        let id = tender.id;
        db.create_tender(tender)
            .await
            .map_err(|err| anyhow::anyhow!("failed to seed tender {id}: {err}"))?;
    }
    Ok(count)
}
