use super::{BidPath, Data, load_tender};
use crate::{ApiApplication, DateTimeOf, error::ApiError};

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tender_core::{guard::retrieve_projection, models::BidView};
use tracing::{Level, event};

/// Retrieve a single bid.
///
/// The caller's role decides whether the bid is concealed: its owner always
/// sees it in full.
///
/// # Returns
///
/// - `200 OK`: The bid
/// - `401 Unauthorized`: Missing `can_view_tender` permission
/// - `403 Forbidden`: The bid is concealed from this caller
/// - `404 Not Found`: Tender or bid does not exist
pub(crate) async fn read_bid<T: ApiApplication>(
    State(app): State<T>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(BidPath { tender_id, bid_id }): Path<BidPath>,
) -> Result<Json<Data<BidView<DateTimeOf<T>>>>, ApiError> {
    if !app.can_view_tender(&auth).await {
        return Err(ApiError::unauthorized());
    }

    let tender = load_tender(&app, tender_id).await?;
    let bid = tender
        .bid(bid_id)
        .ok_or_else(|| ApiError::not_found("bid_id"))?;

    let role = app.authenticated_role(&auth, bid).await;
    let projection = retrieve_projection(role, tender.status).map_err(|failure| {
        event!(Level::DEBUG, %tender_id, %bid_id, %role, reason = %failure);
        ApiError::forbidden(failure.name(), failure)
    })?;

    Ok(Json(Data {
        data: projection.project(bid),
    }))
}
