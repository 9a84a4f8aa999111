use super::Permissions;
use headers::{Authorization, authorization::Bearer};
use tender_core::{
    models::{Bid, Role},
    ports::Application,
};
use tender_sqlite::{Db, types::DateTime};

/// An application with a stopped clock.
#[derive(Clone)]
pub struct TestApp {
    pub db: Db,
    pub now: DateTime,
}

impl TestApp {
    fn permissions(&self, context: &Authorization<Bearer>) -> Option<Permissions> {
        context.0.token().parse().ok()
    }
}

impl Application for TestApp {
    // Plain-text permission declarations are stuffed into the token
    type Context = Authorization<Bearer>;

    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        self.now
    }

    async fn can_view_tender(&self, context: &Self::Context) -> bool {
        self.permissions(context)
            .is_some_and(|p| p.can_view_tender)
    }

    async fn can_edit_bid(&self, context: &Self::Context, bid: &Bid<DateTime>) -> bool {
        self.permissions(context)
            .is_some_and(|p| p.can_edit_bid && (p.admin || p.bidder_id.contains(&bid.bidder_id)))
    }

    async fn authenticated_role(&self, context: &Self::Context, bid: &Bid<DateTime>) -> Role {
        match self.permissions(context) {
            Some(p) if p.admin => Role::Administrator,
            Some(p) if p.bidder_id.contains(&bid.bidder_id) => Role::BidOwner,
            _ => Role::Anonymous,
        }
    }
}
