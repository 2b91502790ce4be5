//! DTOs for chart endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters shared by the chart endpoints.
///
/// `asOf` pins the day treated as "now"; it defaults to the local date.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQueryParams {
    #[serde(rename = "asOf")]
    pub as_of: Option<NaiveDate>,
}
