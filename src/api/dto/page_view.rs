//! DTOs for page-view recording.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to record one view of a restaurant page.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordPageViewRequest {
    /// Stable restaurant identifier; views are bucketed per key.
    #[validate(length(min = 1, max = 128, message = "restaurantKey must not be empty"))]
    pub restaurant_key: String,

    /// Display name; the latest one recorded for a key wins.
    #[validate(length(min = 1, max = 256, message = "name must not be empty"))]
    pub name: String,
}

/// Acknowledgement that a view was queued for recording.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPageViewResponse {
    pub status: &'static str,
    pub restaurant_key: String,
    pub viewed_on: NaiveDate,
}
