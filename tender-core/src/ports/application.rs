use super::{BidRepository, Repository, TenderRepository};
use crate::models::{Bid, Role};

/// The hosting application.
///
/// An implementation wires together a storage backend, a clock, and the
/// means of resolving who the caller is. The `Context` is whatever the
/// transport extracts from a request to identify the caller (for the HTTP
/// adapter, the bearer token).
pub trait Application {
    /// Request-scoped caller identity
    type Context: Send + Sync;

    /// The storage backend
    type Repository: TenderRepository + BidRepository;

    /// Access the storage backend.
    fn database(&self) -> &Self::Repository;

    /// The current instant, used for tendering-window checks and change stamps.
    fn now(&self) -> <Self::Repository as Repository>::DateTime;

    /// Whether the caller may read tenders and their bids at all.
    fn can_view_tender(&self, context: &Self::Context) -> impl Future<Output = bool> + Send;

    /// Whether the caller may submit changes to `bid`.
    fn can_edit_bid(
        &self,
        context: &Self::Context,
        bid: &Bid<<Self::Repository as Repository>::DateTime>,
    ) -> impl Future<Output = bool> + Send;

    /// The caller's role with respect to `bid`.
    fn authenticated_role(
        &self,
        context: &Self::Context,
        bid: &Bid<<Self::Repository as Repository>::DateTime>,
    ) -> impl Future<Output = Role> + Send;
}
