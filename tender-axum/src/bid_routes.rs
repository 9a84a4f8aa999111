//! REST API endpoints for the bids of a tender.
//!
//! Every route requires the caller to be allowed to view the tender. The
//! visibility and amendment rules themselves live in [`tender_core::guard`];
//! these handlers resolve the tender and bid, ask the application who the
//! caller is, and translate the guard's verdict into a response.

use crate::{
    ApiApplication, DateTimeOf,
    error::{ApiError, ErrorBody},
};
use aide::{
    axum::{ApiRouter, routing::get_with},
    transform::TransformOperation,
};
use axum::Json;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tender_core::{
    models::{BidId, Tender, TenderId},
    ports::TenderRepository as _,
};

mod list;
use list::*;

mod read;
use read::*;

mod update;
use update::*;

/// Path parameters for tender-wide endpoints.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct TenderPath {
    /// The unique identifier of the tender
    tender_id: TenderId,
}

/// Path parameters for endpoints addressing one bid.
#[derive(Deserialize, JsonSchema)]
#[schemars(inline)]
struct BidPath {
    /// The unique identifier of the tender
    tender_id: TenderId,
    /// The unique identifier of the bid
    bid_id: BidId,
}

/// The `{"data": ...}` envelope of request and response bodies.
#[derive(Serialize, Deserialize, JsonSchema)]
pub(crate) struct Data<T> {
    pub data: T,
}

/// The response to an update. `data` is omitted when nothing changed.
#[derive(Serialize, JsonSchema)]
pub(crate) struct Changed<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Creates a router with bid-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route_with(
            "/{tender_id}/bids",
            get_with(list_bids::<T>, list_bids_docs),
            |route| route.security_requirement("jwt").tag("bids"),
        )
        .api_route_with(
            "/{tender_id}/bids/{bid_id}",
            get_with(read_bid::<T>, read_bid_docs)
                .patch_with(update_bid::<T>, update_bid_docs),
            |route| route.security_requirement("jwt").tag("bids"),
        )
}

/// Load a tender with its bids, or explain why not.
async fn load_tender<T: ApiApplication>(
    app: &T,
    tender_id: TenderId,
) -> Result<Tender<DateTimeOf<T>>, ApiError> {
    app.database()
        .get_tender(tender_id)
        .await
        .map_err(ApiError::storage)?
        .ok_or_else(|| ApiError::not_found("tender_id"))
}

fn list_bids_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("List bids")
        .description(
            r#"
            List the bids of a tender. While tendering is open the bids are
            concealed and the request is refused; afterwards each bid is
            shown with the fields the tender's status allows.

            Requires `can_view_tender` permission.
            "#,
        )
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Unauthorized"))
        .response_with::<403, Json<ErrorBody>, _>(|res| {
            res.description("Bids are concealed in the tender's current status")
        })
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("Tender not found"))
}

fn read_bid_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Retrieve a bid")
        .description(
            r#"
            Retrieve one bid. The bid's owner always sees all of it; other
            callers are subject to the same concealment as listing.

            Requires `can_view_tender` permission.
            "#,
        )
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Unauthorized"))
        .response_with::<403, Json<ErrorBody>, _>(|res| {
            res.description("The bid is concealed in the tender's current status")
        })
        .response_with::<404, Json<ErrorBody>, _>(|res| {
            res.description("Tender or bid not found")
        })
}

fn update_bid_docs(op: TransformOperation) -> TransformOperation<'_> {
    op.summary("Amend a bid")
        .description(
            r#"
            Partially update a bid. Outside of administration, a bid may only be
            amended while the tender is in `active.tendering`, within the
            tendering period, and only if it stays `pending`. Changes to an
            offered amount are timestamped. When nothing changes the response
            carries no `data`.

            Requires `can_edit_bid` permission for the bid.
            "#,
        )
        .response_with::<401, Json<ErrorBody>, _>(|res| res.description("Unauthorized"))
        .response_with::<403, Json<ErrorBody>, _>(|res| {
            res.description("The amendment is not allowed")
        })
        .response_with::<404, Json<ErrorBody>, _>(|res| {
            res.description("Tender or bid not found")
        })
        .response_with::<409, Json<ErrorBody>, _>(|res| {
            res.description("The bid changed while the amendment was being checked")
        })
        .response_with::<422, Json<ErrorBody>, _>(|res| {
            res.description("The body is not a valid patch")
        })
        .response_with::<500, Json<ErrorBody>, _>(|res| {
            res.description("Database operation failed")
        })
}
