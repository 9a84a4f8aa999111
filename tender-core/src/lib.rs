#![warn(missing_docs)]
// Note: this overwrites the link in the README to point to the rust docs of the tender-core crate.
//! [tender_core]: https://docs.rs/tender_core/latest/tender_core/index.html
#![doc = include_str!("../README.md")]

/// Core domain models for tenders and their bids.
///
/// The models are plain data with a small amount of behavior attached
/// (status predicates, the tendering window, the reference merge of a
/// partial update). Persistence and transport are left to the adapters.
pub mod models;

/// Interface traits for the tender bid resource.
///
/// These are the "ports" in the hexagonal architecture pattern: storage
/// backends implement the repository traits, while the hosting application
/// implements [`ports::Application`] to supply the clock and the caller's
/// permissions.
pub mod ports;

/// The rules that gate reading and updating bids.
///
/// Every function in this module is pure: it inspects already-loaded records
/// and either rejects with a reason or returns what the adapter should do next.
pub mod guard;
