//! Popularity score of one restaurant.

use serde::{Deserialize, Serialize};

/// Normalized popularity in `0.0..=1.0`, relative to the other restaurants
/// scored alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantScore {
    pub restaurant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_key: Option<String>,
    pub score: f64,
}
