use crate::models::{Projection, Role, TenderStatus};
use thiserror::Error;

/// The reasons bids are hidden from a caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewFailure {
    /// Listing bids while they are concealed
    #[error("Can't view bids in current ({0}) tender status")]
    Bids(TenderStatus),
    /// Retrieving somebody else's bid while it is concealed
    #[error("Can't view bid in current ({0}) tender status")]
    Bid(TenderStatus),
}

impl ViewFailure {
    /// The part of the request the failure is reported against.
    pub fn name(&self) -> &'static str {
        "data"
    }
}

/// Decide how the bids of a tender may be listed.
pub fn list_projection(status: TenderStatus) -> Result<Projection, ViewFailure> {
    if status.conceals_bids() {
        Err(ViewFailure::Bids(status))
    } else {
        Ok(Projection::Status(status))
    }
}

/// Decide how a single bid may be shown to a caller holding `role`.
///
/// A bid's owner always sees all of it.
pub fn retrieve_projection(role: Role, status: TenderStatus) -> Result<Projection, ViewFailure> {
    if role.owns_bid() {
        Ok(Projection::View)
    } else if status.conceals_bids() {
        Err(ViewFailure::Bid(status))
    } else {
        Ok(Projection::Status(status))
    }
}
