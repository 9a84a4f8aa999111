mod bid;
mod map;
mod patch;
mod period;
mod projection;
mod role;
mod status;
mod tender;
mod value;

pub use bid::{Bid, LotValue};
pub use map::LotMap;
pub use patch::{BidPatch, LotValuePatch, MergeOutcome, StampedPatch, ValuePatch};
pub use period::Period;
pub use projection::{BidView, LotValueView, Projection};
pub use role::{ParseRoleError, Role};
pub use status::{BidStatus, ParseStatusError, TenderStatus};
pub use tender::Tender;
pub use value::Value;

macro_rules! uuid_wrapper {
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $struct(pub uuid::Uuid);

        impl From<uuid::Uuid> for $struct {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for uuid::Uuid {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $struct {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl std::ops::Deref for $struct {
            type Target = uuid::Uuid;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

uuid_wrapper!(TenderId, "Unique identifier for a tender");
uuid_wrapper!(BidId, "Unique identifier for a bid submitted against a tender");
uuid_wrapper!(LotId, "Unique identifier for a lot within a tender");
uuid_wrapper!(BidderId, "Unique identifier for the economic operator owning a bid");
