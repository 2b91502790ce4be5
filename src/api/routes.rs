//! API route configuration.

use crate::api::handlers::{
    align_payload_handler, bar_chart_handler, bar_payload_handler, line_chart_handler,
    list_page_views_handler, record_page_view_handler, score_payload_handler, scores_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /page-views`   - Stored weekly series
/// - `POST /page-views`   - Queue one page view
/// - `GET  /charts/line`  - Multi-line chart data from the store
/// - `POST /charts/line`  - Multi-line chart data for a supplied payload
/// - `GET  /charts/bar`   - Bar chart data from the store
/// - `POST /charts/bar`   - Bar chart data for a supplied payload
/// - `GET  /scores`       - Popularity scores from the store
/// - `POST /scores`       - Popularity scores for a supplied payload
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/page-views",
            get(list_page_views_handler).post(record_page_view_handler),
        )
        .route(
            "/charts/line",
            get(line_chart_handler).post(align_payload_handler),
        )
        .route(
            "/charts/bar",
            get(bar_chart_handler).post(bar_payload_handler),
        )
        .route("/scores", get(scores_handler).post(score_payload_handler))
}
