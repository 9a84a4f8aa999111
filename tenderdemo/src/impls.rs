//! Application implementation with JWT-based authorization.

use headers::{Authorization, authorization::Bearer};
use jwt_simple::{
    claims::JWTClaims,
    prelude::{HS256Key, MACLike},
};
use serde::{Deserialize, Serialize};
use tender_core::{
    models::{Bid, BidderId, Role},
    ports::Application,
};
use tender_sqlite::{Db, types::DateTime};

/// The demo application: SQLite storage, the wall clock, and HS256 tokens.
#[derive(Clone)]
pub struct DemoApp {
    /// Database connection for persistent storage
    pub db: Db,
    /// HMAC key for JWT token verification
    pub key: HS256Key,
}

impl DemoApp {
    /// Extract and verify JWT claims from the authorization header.
    fn claims(&self, context: &Authorization<Bearer>) -> Option<JWTClaims<CustomJWTClaims>> {
        let token = context.0.token();
        self.key.verify_token::<CustomJWTClaims>(token, None).ok()
    }

    /// Whether the `sub:` claim names the bidder that owns `bid`.
    fn is_owner(claims: &JWTClaims<CustomJWTClaims>, bid: &Bid<DateTime>) -> bool {
        claims
            .subject
            .as_deref()
            .and_then(|sub| sub.parse::<BidderId>().ok())
            .is_some_and(|bidder_id| bidder_id == bid.bidder_id)
    }
}

impl Application for DemoApp {
    type Context = Authorization<Bearer>;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        time::OffsetDateTime::now_utc().into()
    }

    async fn can_view_tender(&self, context: &Self::Context) -> bool {
        // anybody with a valid JWT can view tenders
        self.claims(context).is_some()
    }

    async fn can_edit_bid(&self, context: &Self::Context, bid: &Bid<DateTime>) -> bool {
        self.claims(context)
            .is_some_and(|claims| claims.custom.admin || Self::is_owner(&claims, bid))
    }

    async fn authenticated_role(&self, context: &Self::Context, bid: &Bid<DateTime>) -> Role {
        match self.claims(context) {
            Some(claims) if claims.custom.admin => Role::Administrator,
            Some(claims) if Self::is_owner(&claims, bid) => Role::BidOwner,
            Some(claims) if claims.custom.tender_owner => Role::TenderOwner,
            _ => Role::Anonymous,
        }
    }
}

/// Custom claims structure for JWT tokens.
#[derive(Serialize, Deserialize, Default)]
pub struct CustomJWTClaims {
    /// The token holder administers the platform.
    #[serde(default)]
    pub admin: bool,
    /// The token holder is the procuring entity.
    #[serde(default)]
    pub tender_owner: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jwt_simple::prelude::{Claims, Duration};
    use tender_core::models::{BidId, BidStatus, TenderId};
    use tender_sqlite::config::SqliteConfig;
    use uuid::Uuid;

    fn bid() -> Bid<DateTime> {
        Bid {
            id: BidId(Uuid::new_v4()),
            tender_id: TenderId(Uuid::new_v4()),
            bidder_id: BidderId(Uuid::new_v4()),
            status: BidStatus::Pending,
            value: None,
            date: None,
            lot_values: Vec::new(),
        }
    }

    fn token(
        key: &HS256Key,
        subject: Option<BidderId>,
        custom: CustomJWTClaims,
    ) -> Authorization<Bearer> {
        let mut claims = Claims::with_custom_claims(custom, Duration::from_hours(1));
        if let Some(subject) = subject {
            claims = claims.with_subject(subject);
        }
        Authorization::bearer(&key.authenticate(claims).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_roles_from_claims() {
        let key = HS256Key::from_bytes(b"secret");
        let app = DemoApp {
            db: Db::open(&SqliteConfig::default()).await.unwrap(),
            key: key.clone(),
        };
        let bid = bid();

        let owner = token(&key, Some(bid.bidder_id), Default::default());
        assert!(app.can_view_tender(&owner).await);
        assert!(app.can_edit_bid(&owner, &bid).await);
        assert_eq!(app.authenticated_role(&owner, &bid).await, Role::BidOwner);

        let other = token(&key, Some(BidderId(Uuid::new_v4())), Default::default());
        assert!(app.can_view_tender(&other).await);
        assert!(!app.can_edit_bid(&other, &bid).await);
        assert_eq!(app.authenticated_role(&other, &bid).await, Role::Anonymous);

        let admin = token(
            &key,
            None,
            CustomJWTClaims {
                admin: true,
                ..Default::default()
            },
        );
        assert!(app.can_edit_bid(&admin, &bid).await);
        assert_eq!(app.authenticated_role(&admin, &bid).await, Role::Administrator);

        let procuring = token(
            &key,
            None,
            CustomJWTClaims {
                tender_owner: true,
                ..Default::default()
            },
        );
        assert!(!app.can_edit_bid(&procuring, &bid).await);
        assert_eq!(app.authenticated_role(&procuring, &bid).await, Role::TenderOwner);
    }

    #[tokio::test]
    async fn test_forged_token_is_rejected() {
        let app = DemoApp {
            db: Db::open(&SqliteConfig::default()).await.unwrap(),
            key: HS256Key::from_bytes(b"secret"),
        };
        let bid = bid();
        let forged = token(
            &HS256Key::from_bytes(b"not the secret"),
            Some(bid.bidder_id),
            CustomJWTClaims {
                admin: true,
                ..Default::default()
            },
        );

        assert!(!app.can_view_tender(&forged).await);
        assert!(!app.can_edit_bid(&forged, &bid).await);
        assert_eq!(app.authenticated_role(&forged, &bid).await, Role::Anonymous);
    }
}
