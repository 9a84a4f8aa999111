use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use tender_core::models::BidderId;

// The endpoints under test only see an `Authorization: Bearer <...>` header.
// Instead of signing real tokens, the test application reads a plain-text,
// form-encoded declaration of the caller out of it.
#[derive(Serialize, Deserialize, Default)]
pub struct Permissions {
    #[serde(default)]
    pub bidder_id: Vec<BidderId>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub can_view_tender: bool,
    #[serde(default)]
    pub can_edit_bid: bool,
}

impl Permissions {
    /// A caller that may view the tender and amend the bids of `bidder_id`.
    pub fn bidder(bidder_id: BidderId) -> Self {
        Self {
            bidder_id: vec![bidder_id],
            can_view_tender: true,
            can_edit_bid: true,
            ..Default::default()
        }
    }

    /// A caller that may view the tender but owns no bids.
    pub fn viewer() -> Self {
        Self {
            can_view_tender: true,
            ..Default::default()
        }
    }

    /// An administrator.
    pub fn admin() -> Self {
        Self {
            admin: true,
            can_view_tender: true,
            can_edit_bid: true,
            ..Default::default()
        }
    }
}

impl Display for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_html_form::to_string(self).unwrap())
    }
}

impl FromStr for Permissions {
    type Err = serde_html_form::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let deserializer = serde_html_form::Deserializer::new(form_urlencoded::parse(s.as_bytes()));
        Self::deserialize(deserializer)
    }
}
