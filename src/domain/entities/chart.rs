//! Chart-ready data sets produced from page-view series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One restaurant's weekly counts re-indexed onto a date axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedSeries {
    pub restaurant_name: String,
    pub click_data: Vec<u64>,
}

impl AlignedSeries {
    /// A series with `len` zero entries.
    pub fn zeroed(restaurant_name: impl Into<String>, len: usize) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            click_data: vec![0; len],
        }
    }
}

/// Data for the multi-line chart: a shared weekly axis plus one series per
/// restaurant, each exactly as long as the axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedDataset {
    pub dates: Vec<NaiveDate>,
    pub restaurant_data: Vec<AlignedSeries>,
}

impl AlignedDataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.restaurant_data.is_empty()
    }
}

/// Data for the stacked/grouped bar chart.
///
/// `data` serializes as `[lastWeekCounts, averages]`; both are parallel to
/// `restaurant_names`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartData {
    pub data: (Vec<u64>, Vec<f64>),
    pub restaurant_names: Vec<String>,
}

impl BarChartData {
    pub fn new(last_week_counts: Vec<u64>, averages: Vec<f64>, restaurant_names: Vec<String>) -> Self {
        Self {
            data: (last_week_counts, averages),
            restaurant_names,
        }
    }

    pub fn last_week_counts(&self) -> &[u64] {
        &self.data.0
    }

    pub fn averages(&self) -> &[f64] {
        &self.data.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_dataset_serializes_with_empty_arrays() {
        let value = serde_json::to_value(AlignedDataset::empty()).unwrap();
        assert_eq!(value, json!({ "dates": [], "restaurantData": [] }));
    }

    #[test]
    fn test_dataset_dates_serialize_as_iso_days() {
        let dataset = AlignedDataset {
            dates: vec![NaiveDate::from_ymd_opt(2020, 3, 8).unwrap()],
            restaurant_data: vec![AlignedSeries {
                restaurant_name: "Wildfire".to_string(),
                click_data: vec![10],
            }],
        };

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["dates"][0], "2020-03-08");
        assert_eq!(value["restaurantData"][0]["restaurantName"], "Wildfire");
        assert_eq!(value["restaurantData"][0]["clickData"], json!([10]));
    }

    #[test]
    fn test_bar_chart_data_shape() {
        let bar = BarChartData::new(
            vec![10, 8],
            vec![6.0, 8.0],
            vec!["Wildfire".to_string(), "Poke Doke".to_string()],
        );

        assert_eq!(bar.last_week_counts(), &[10, 8]);
        assert_eq!(bar.averages(), &[6.0, 8.0]);

        let value = serde_json::to_value(&bar).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [[10, 8], [6.0, 8.0]],
                "restaurantNames": ["Wildfire", "Poke Doke"]
            })
        );
    }
}
