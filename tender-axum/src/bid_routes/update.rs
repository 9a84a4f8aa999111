use super::{BidPath, Changed, Data, load_tender};
use crate::{ApiApplication, DateTimeOf, error::ApiError, extract::Body};

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tender_core::{
    guard::{PreparedUpdate, prepare_update, unknown_lots},
    models::{BidPatch, BidView, MergeOutcome, Projection},
    ports::BidRepository as _,
};
use tracing::{Level, event};

/// Amend a bid.
///
/// The guard decides whether the caller may amend the bid at this moment,
/// and stamps any change of an offered amount with the current instant.
/// Lot values for lots the bid does not hold are dropped by the merge.
///
/// # Returns
///
/// - `200 OK`: The updated bid in full, or an empty object if nothing changed
/// - `401 Unauthorized`: Missing `can_edit_bid` permission
/// - `403 Forbidden`: The guard refused the amendment
/// - `404 Not Found`: Tender or bid does not exist
/// - `409 Conflict`: The bid changed while the amendment was being checked
/// - `422 Unprocessable Entity`: The body is not a valid patch
/// - `500 Internal Server Error`: Database operation failed
pub(crate) async fn update_bid<T: ApiApplication>(
    State(app): State<T>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(BidPath { tender_id, bid_id }): Path<BidPath>,
    Body(Data { data: patch }): Body<Data<BidPatch>>,
) -> Result<Json<Changed<BidView<DateTimeOf<T>>>>, ApiError> {
    let now = app.now();
    let tender = load_tender(&app, tender_id).await?;
    let bid = tender
        .bid(bid_id)
        .ok_or_else(|| ApiError::not_found("bid_id"))?;

    if !app.can_edit_bid(&auth, bid).await {
        return Err(ApiError::unauthorized());
    }
    let role = app.authenticated_role(&auth, bid).await;

    let PreparedUpdate {
        patch,
        touch_tender,
    } = prepare_update(role, &tender, bid, &patch, &now).map_err(|failure| {
        event!(Level::DEBUG, %tender_id, %bid_id, %role, reason = %failure);
        ApiError::forbidden(failure.name(), failure)
    })?;

    for lot_id in unknown_lots(bid, &patch.patch) {
        event!(
            Level::WARN,
            %tender_id,
            %bid_id,
            %lot_id,
            "Ignoring value for lot {lot_id} which the bid does not hold"
        );
    }

    let outcome = app
        .database()
        .apply_bid_patch(tender_id, bid_id, patch, touch_tender, now)
        .await
        .map_err(ApiError::storage)?;

    let updated = match outcome {
        MergeOutcome::Applied(updated) => updated,
        MergeOutcome::Unchanged => return Ok(Json(Changed { data: None })),
        MergeOutcome::Stale => {
            event!(Level::DEBUG, %tender_id, %bid_id, "Bid changed since it was checked");
            return Err(ApiError::conflict());
        }
    };

    event!(
        Level::INFO,
        message_id = "tender_bid_patch",
        %tender_id,
        bid_id = %updated.id,
        "Updated tender bid {}",
        updated.id
    );
    Ok(Json(Changed {
        data: Some(Projection::View.project(&updated)),
    }))
}
