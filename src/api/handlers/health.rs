//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts stored restaurants
/// 2. **Page View Queue**: Checks if the channel is open and reports free capacity
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Restaurants tracked: 12" },
///     "page_view_queue": { "status": "ok", "message": "Capacity: 10000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let queue_check = check_page_view_queue(&state);

    let all_healthy = store_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            page_view_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.page_view_service.count_restaurants().await {
        Ok(count) => CheckStatus::ok(format!("Restaurants tracked: {}", count)),
        Err(e) => CheckStatus::error(format!("Store error: {}", e)),
    }
}

/// Checks if the page-view recording queue is operational.
fn check_page_view_queue(state: &AppState) -> CheckStatus {
    if state.page_view_sender.is_closed() {
        CheckStatus::error("Page view queue is closed")
    } else {
        CheckStatus::ok(format!(
            "Capacity: {}",
            state.page_view_sender.capacity()
        ))
    }
}
