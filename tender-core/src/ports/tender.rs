use crate::models::{Tender, TenderId, TenderStatus};

/// Repository interface for the tenders that own bids.
///
/// The bid resource only ever reads tenders. Creation and status changes are
/// provided so that fixtures and administrative tooling can drive a tender
/// through its lifecycle; the lifecycle rules themselves live elsewhere.
pub trait TenderRepository: super::Repository {
    /// Store a tender along with any bids it already carries.
    fn create_tender(
        &self,
        tender: Tender<Self::DateTime>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Retrieve a tender and all of its bids, in submission order.
    fn get_tender(
        &self,
        tender_id: TenderId,
    ) -> impl Future<Output = Result<Option<Tender<Self::DateTime>>, Self::Error>> + Send;

    /// Move a tender to a new status.
    ///
    /// # Returns
    ///
    /// - Ok(true) if successful
    /// - Ok(false) if no such tender exists
    /// - Err otherwise
    fn set_tender_status(
        &self,
        tender_id: TenderId,
        status: TenderStatus,
        as_of: Self::DateTime,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
