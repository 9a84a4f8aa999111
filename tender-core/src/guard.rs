//! Bid rules, in the order an adapter applies them.
//!
//! * Reads go through [`list_projection`] or [`retrieve_projection`], which
//!   either reject or name the projection to serialize with.
//! * Updates go through [`prepare_update`], which runs the ordered checks of
//!   [`check_update`], stamps amount changes with [`stamp_value_changes`], and
//!   hands back the patch to merge together with the instruction not to mark
//!   the tender as modified.
//!
//! Every rejection maps to HTTP 403 and reports the name of the offending
//! part of the request (see [`UpdateFailure::name`] and [`ViewFailure::name`]).

mod audit;
mod update;
mod visibility;

pub use audit::{stamp_value_changes, unknown_lots};
pub use update::{PreparedUpdate, UpdateFailure, check_update, effective_status, prepare_update};
pub use visibility::{ViewFailure, list_projection, retrieve_projection};
