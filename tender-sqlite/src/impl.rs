//! Repository trait implementations for the SQLite database.

use crate::{Db, types::DateTime};
use tender_core::ports::Repository;

mod bid;
mod tender;

impl Repository for Db {
    type Error = sqlx::Error;
    type DateTime = DateTime;
}
