//! Handlers for page-view recording and listing.

use axum::{Json, extract::State, http::StatusCode};
use metrics::counter;
use serde_json::json;
use tokio::sync::mpsc::error::TrySendError;
use validator::Validate;

use crate::api::dto::page_view::{RecordPageViewRequest, RecordPageViewResponse};
use crate::domain::calendar;
use crate::domain::entities::RestaurantPageViews;
use crate::domain::page_view_event::PageViewEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Queues one view of a restaurant page.
///
/// # Endpoint
///
/// `POST /api/page-views`
///
/// # Request Body
///
/// ```json
/// { "restaurantKey": "4", "name": "Wildfire" }
/// ```
///
/// The view is stamped with today's date and counted into the current week
/// by the background worker.
///
/// # Errors
///
/// - 400 Bad Request if either field is empty
/// - 503 Service Unavailable if the recording queue is full or closed
pub async fn record_page_view_handler(
    State(state): State<AppState>,
    Json(payload): Json<RecordPageViewRequest>,
) -> Result<(StatusCode, Json<RecordPageViewResponse>), AppError> {
    payload.validate()?;

    let viewed_on = calendar::today();
    let event = PageViewEvent::new(payload.restaurant_key.clone(), payload.name, viewed_on);

    match state.page_view_sender.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            counter!("page_views_dropped_total").increment(1);
            tracing::warn!(
                restaurant_key = %payload.restaurant_key,
                "Page view queue full, rejecting view"
            );
            return Err(AppError::unavailable(
                "Page view queue is full",
                json!({ "restaurantKey": payload.restaurant_key }),
            ));
        }
        Err(TrySendError::Closed(_)) => {
            tracing::error!("Page view queue closed");
            return Err(AppError::unavailable(
                "Page view recording is unavailable",
                json!({}),
            ));
        }
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(RecordPageViewResponse {
            status: "accepted",
            restaurant_key: payload.restaurant_key,
            viewed_on,
        }),
    ))
}

/// Lists every stored series in first-recorded order.
///
/// # Endpoint
///
/// `GET /api/page-views`
///
/// # Response
///
/// ```json
/// [
///   {
///     "name": "Wildfire",
///     "id": "4",
///     "pageViews": [{ "week": 10, "year": 2020, "count": 2 }]
///   }
/// ]
/// ```
pub async fn list_page_views_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantPageViews>>, AppError> {
    let series = state.page_view_service.list_page_views().await?;
    Ok(Json(series))
}
