//! Handlers for chart data endpoints.
//!
//! `GET` variants chart the page-view store; `POST` variants chart a
//! supplied payload in the `[{name, id?, pageViews}]` shape, where `null`
//! and `[]` both yield an empty result. Line charts larger than the
//! configured limits are rejected with `400 validation_error`.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::chart::ChartQueryParams;
use crate::domain::entities::{AlignedDataset, BarChartData, RestaurantPageViews, RestaurantScore};
use crate::error::AppError;
use crate::state::AppState;

/// Multi-line chart data from the store.
///
/// # Endpoint
///
/// `GET /api/charts/line?asOf=2020-03-20`
///
/// # Response
///
/// ```json
/// {
///   "dates": ["2020-03-01", "2020-03-08"],
///   "restaurantData": [
///     { "restaurantName": "Wildfire", "clickData": [2, 10] },
///     { "restaurantName": "Poke Doke", "clickData": [0, 8] }
///   ]
/// }
/// ```
pub async fn line_chart_handler(
    State(state): State<AppState>,
    Query(params): Query<ChartQueryParams>,
) -> Result<Json<AlignedDataset>, AppError> {
    let dataset = state.chart_service.line_chart(params.as_of).await?;
    Ok(Json(dataset))
}

/// Bar chart data from the store.
///
/// # Endpoint
///
/// `GET /api/charts/bar?asOf=2020-03-20`
///
/// # Response
///
/// ```json
/// {
///   "data": [[10, 8], [6.0, 8.0]],
///   "restaurantNames": ["Wildfire", "Poke Doke"]
/// }
/// ```
pub async fn bar_chart_handler(
    State(state): State<AppState>,
    Query(params): Query<ChartQueryParams>,
) -> Result<Json<BarChartData>, AppError> {
    let bar = state.chart_service.bar_chart(params.as_of).await?;
    Ok(Json(bar))
}

/// Multi-line chart data for a supplied payload.
///
/// `POST /api/charts/line`
pub async fn align_payload_handler(
    State(state): State<AppState>,
    Query(params): Query<ChartQueryParams>,
    Json(payload): Json<Option<Vec<RestaurantPageViews>>>,
) -> Result<Json<AlignedDataset>, AppError> {
    let series = payload.unwrap_or_default();
    let dataset = state.chart_service.line_chart_for(&series, params.as_of)?;
    Ok(Json(dataset))
}

/// Bar chart data for a supplied payload.
///
/// `POST /api/charts/bar`
pub async fn bar_payload_handler(
    State(state): State<AppState>,
    Query(params): Query<ChartQueryParams>,
    Json(payload): Json<Option<Vec<RestaurantPageViews>>>,
) -> Json<BarChartData> {
    let series = payload.unwrap_or_default();
    Json(state.chart_service.bar_chart_for(&series, params.as_of))
}

/// Popularity scores from the store.
///
/// # Endpoint
///
/// `GET /api/scores`
///
/// # Response
///
/// ```json
/// [
///   { "restaurantName": "Wildfire", "restaurantKey": "4", "score": 0.0 },
///   { "restaurantName": "Poke Doke", "restaurantKey": "7", "score": 1.0 }
/// ]
/// ```
pub async fn scores_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantScore>>, AppError> {
    let scores = state.chart_service.scores().await?;
    Ok(Json(scores))
}

/// Popularity scores for a supplied payload.
///
/// `POST /api/scores`
pub async fn score_payload_handler(
    State(state): State<AppState>,
    Json(payload): Json<Option<Vec<RestaurantPageViews>>>,
) -> Json<Vec<RestaurantScore>> {
    let series = payload.unwrap_or_default();
    Json(state.chart_service.scores_for(&series))
}
