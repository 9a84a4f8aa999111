use super::{Data, TenderPath, load_tender};
use crate::{ApiApplication, DateTimeOf, error::ApiError};

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tender_core::{guard::list_projection, models::BidView};
use tracing::{Level, event};

/// List every bid of a tender.
///
/// # Returns
///
/// - `200 OK`: The bids, in submission order, projected by tender status
/// - `401 Unauthorized`: Missing `can_view_tender` permission
/// - `403 Forbidden`: Bids are concealed while tendering is open
/// - `404 Not Found`: Tender does not exist
pub(crate) async fn list_bids<T: ApiApplication>(
    State(app): State<T>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    Path(TenderPath { tender_id }): Path<TenderPath>,
) -> Result<Json<Data<Vec<BidView<DateTimeOf<T>>>>>, ApiError> {
    if !app.can_view_tender(&auth).await {
        return Err(ApiError::unauthorized());
    }

    let tender = load_tender(&app, tender_id).await?;
    let projection = list_projection(tender.status).map_err(|failure| {
        event!(Level::DEBUG, %tender_id, reason = %failure);
        ApiError::forbidden(failure.name(), failure)
    })?;

    Ok(Json(Data {
        data: tender
            .bids
            .iter()
            .map(|bid| projection.project(bid))
            .collect(),
    }))
}
