use crate::models::{Bid, BidId, MergeOutcome, StampedPatch, TenderId};

/// Repository interface for bid retrieval and merging of partial updates.
pub trait BidRepository: super::Repository {
    /// Attach a new bid to its tender.
    fn create_bid(
        &self,
        bid: Bid<Self::DateTime>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Retrieve a single bid of a tender, returning Option::None if it does not exist.
    fn get_bid(
        &self,
        tender_id: TenderId,
        bid_id: BidId,
    ) -> impl Future<Output = Result<Option<Bid<Self::DateTime>>, Self::Error>> + Send;

    /// Merge a guarded patch into the stored bid.
    ///
    /// The read and the write happen atomically, and nothing is written unless
    /// the stored bid still equals the patch's basis. When `touch_tender` is
    /// false the owning tender's modification time is left alone, even though
    /// one of its bids changed.
    ///
    /// # Returns
    ///
    /// - Ok(MergeOutcome::Applied(bid)) with the updated bid if the merge changed anything
    /// - Ok(MergeOutcome::Unchanged) if the merge was a no-op
    /// - Ok(MergeOutcome::Stale) if the bid is gone or was changed since it was stamped
    /// - Err otherwise
    fn apply_bid_patch(
        &self,
        tender_id: TenderId,
        bid_id: BidId,
        patch: StampedPatch<Self::DateTime>,
        touch_tender: bool,
        as_of: Self::DateTime,
    ) -> impl Future<Output = Result<MergeOutcome<Self::DateTime>, Self::Error>> + Send;
}
