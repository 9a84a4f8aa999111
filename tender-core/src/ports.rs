use std::fmt::Display;

mod application;
mod bid;
mod tender;

pub use application::Application;
pub use bid::BidRepository;
pub use tender::TenderRepository;

/// Base repository trait defining common types and error handling.
///
/// All specialized repository traits extend this trait. The associated
/// `DateTime` is the instant type used for tendering periods and change
/// timestamps; the guard only requires that it be totally ordered and
/// printable.
pub trait Repository {
    /// The error type for underlying operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// A timestamp type for tendering periods and change stamps
    type DateTime: Clone + Ord + Display + Send + Sync + 'static;
}
