//! Type definitions for the SQLite implementation.
//!
//! The public [`DateTime`] is the instant type of this backend. The remaining
//! types map database rows and are internal.

use tender_core::models::{Period, Tender, TenderId, TenderStatus};

mod datetime;
pub use datetime::DateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct TenderRow {
    pub id: String,
    pub status: String,
    pub tender_period_start: Option<DateTime>,
    pub tender_period_end: DateTime,
    pub date_modified: DateTime,
}

impl TryFrom<TenderRow> for Tender<DateTime> {
    type Error = sqlx::Error;

    fn try_from(row: TenderRow) -> Result<Self, Self::Error> {
        Ok(Tender {
            id: row.id.parse::<TenderId>().map_err(decode_error)?,
            status: row.status.parse::<TenderStatus>().map_err(decode_error)?,
            tender_period: Period {
                start_date: row.tender_period_start,
                end_date: row.tender_period_end,
            },
            date_modified: row.date_modified,
            bids: Vec::new(),
        })
    }
}

pub(crate) fn decode_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}
